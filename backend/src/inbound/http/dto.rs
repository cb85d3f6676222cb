//! Wire representations of catalogue entities.
//!
//! Each DTO is a field-for-field rename of its domain counterpart; the
//! `From` impls are the only mapping between the two.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Address, Book, Press, PressCategory};

/// Book as returned by the OData endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Book)]
pub struct BookDto {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// ISBN as printed.
    #[schema(example = "978-0-321-87758-1")]
    pub isbn: String,
    /// Title.
    #[schema(example = "Essential C#5.0")]
    pub title: String,
    /// Author line.
    #[schema(example = "Mark Michaelis")]
    pub author: String,
    /// Price in minor currency units.
    #[schema(example = 5999)]
    pub price_cents: u32,
    /// Shelf location.
    pub location: AddressDto,
    /// Publishing press.
    pub press: PressDto,
}

/// Postal location embedded in a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[schema(as = Address)]
pub struct AddressDto {
    /// City name.
    #[schema(example = "Redmond")]
    pub city: String,
    /// Street line.
    #[schema(example = "156TH AVE NE")]
    pub street: String,
}

/// Press embedded in a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[schema(as = Press)]
pub struct PressDto {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Publisher name.
    #[schema(example = "Addison-Wesley")]
    pub name: String,
    /// Contact address, `null` when unknown.
    pub email: Option<String>,
    /// Publication medium.
    pub category: PressCategoryDto,
}

/// Publication medium, serialised by member name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[schema(as = PressCategory)]
pub enum PressCategoryDto {
    /// Printed books.
    Book,
    /// Periodicals.
    Magazine,
    /// Electronic books.
    EBook,
}

impl From<PressCategory> for PressCategoryDto {
    fn from(value: PressCategory) -> Self {
        match value {
            PressCategory::Book => Self::Book,
            PressCategory::Magazine => Self::Magazine,
            PressCategory::EBook => Self::EBook,
        }
    }
}

impl From<&Address> for AddressDto {
    fn from(value: &Address) -> Self {
        Self {
            city: value.city.clone(),
            street: value.street.clone(),
        }
    }
}

impl From<&Press> for PressDto {
    fn from(value: &Press) -> Self {
        Self {
            id: value.id().get(),
            name: value.name().to_owned(),
            email: value.email().map(str::to_owned),
            category: value.category().into(),
        }
    }
}

impl From<&Book> for BookDto {
    fn from(value: &Book) -> Self {
        Self {
            id: value.id().get(),
            isbn: value.isbn().to_owned(),
            title: value.title().to_owned(),
            author: value.author().to_owned(),
            price_cents: value.price_cents(),
            location: value.location().into(),
            press: value.press().into(),
        }
    }
}
