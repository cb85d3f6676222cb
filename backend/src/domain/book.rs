//! Book and press entities held by the catalogue.
//!
//! Identifiers are assigned by the store when records are inserted, so
//! callers describe new records with [`NewBook`] and [`NewPress`] and read
//! back fully identified [`Book`] values.

use std::fmt;

/// Store-assigned book identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(i32);

impl BookId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Store-assigned press identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PressId(i32);

impl PressId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

/// Publication medium of a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressCategory {
    /// Printed books.
    Book,
    /// Periodicals.
    Magazine,
    /// Electronic books.
    EBook,
}

/// Postal location of a book, embedded in the book record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// City name.
    pub city: String,
    /// Street line.
    pub street: String,
}

/// Press details supplied when seeding, before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPress {
    /// Publisher name.
    pub name: String,
    /// Optional contact address.
    pub email: Option<String>,
    /// Publication medium.
    pub category: PressCategory,
}

impl NewPress {
    /// Attach the store-assigned identifier.
    #[must_use]
    pub fn into_press(self, id: PressId) -> Press {
        Press {
            id,
            name: self.name,
            email: self.email,
            category: self.category,
        }
    }
}

/// Book details supplied when seeding, before identifiers are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    /// ISBN as printed.
    pub isbn: String,
    /// Title.
    pub title: String,
    /// Author line.
    pub author: String,
    /// Price in minor currency units.
    pub price_cents: u32,
    /// Where the book is shelved.
    pub location: Address,
    /// Publishing press.
    pub press: NewPress,
}

impl NewBook {
    /// Attach the store-assigned book and press identifiers.
    #[must_use]
    pub fn into_book(self, id: BookId, press_id: PressId) -> Book {
        Book {
            id,
            isbn: self.isbn,
            title: self.title,
            author: self.author,
            price_cents: self.price_cents,
            location: self.location,
            press: self.press.into_press(press_id),
        }
    }
}

/// Publisher owned by exactly one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Press {
    id: PressId,
    name: String,
    email: Option<String>,
    category: PressCategory,
}

impl Press {
    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> PressId {
        self.id
    }

    /// Publisher name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact address, when known.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Publication medium.
    #[must_use]
    pub const fn category(&self) -> PressCategory {
        self.category
    }
}

/// Catalogued book with its embedded location and owned press.
///
/// # Examples
/// ```
/// use bookshelf::domain::{Address, BookId, NewBook, NewPress, PressCategory, PressId};
///
/// let book = NewBook {
///     isbn: "978-0-321-87758-1".into(),
///     title: "Essential C#5.0".into(),
///     author: "Mark Michaelis".into(),
///     price_cents: 5999,
///     location: Address { city: "Redmond".into(), street: "156TH AVE NE".into() },
///     press: NewPress {
///         name: "Addison-Wesley".into(),
///         email: None,
///         category: PressCategory::Book,
///     },
/// }
/// .into_book(BookId::new(1), PressId::new(1));
///
/// assert_eq!(book.id().get(), 1);
/// assert_eq!(book.press().name(), "Addison-Wesley");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    isbn: String,
    title: String,
    author: String,
    price_cents: u32,
    location: Address,
    press: Press,
}

impl Book {
    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> BookId {
        self.id
    }

    /// ISBN as printed.
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author line.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Price in minor currency units.
    #[must_use]
    pub const fn price_cents(&self) -> u32 {
        self.price_cents
    }

    /// Shelf location.
    #[must_use]
    pub const fn location(&self) -> &Address {
        &self.location
    }

    /// Owning press.
    #[must_use]
    pub const fn press(&self) -> &Press {
        &self.press
    }
}
