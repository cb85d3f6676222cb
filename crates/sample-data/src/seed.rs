//! Seed record types as they appear in the catalogue JSON.

use serde::Deserialize;

/// A book entry without store-assigned identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BookSeed {
    /// International Standard Book Number.
    pub isbn: String,
    /// Book title.
    pub title: String,
    /// Author line as printed on the cover.
    pub author: String,
    /// Price in minor currency units.
    pub price_cents: u32,
    /// Shelf location of the book.
    pub location: AddressSeed,
    /// Publishing press.
    pub press: PressSeed,
}

/// Postal location attached to a book.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddressSeed {
    /// City name.
    pub city: String,
    /// Street line.
    pub street: String,
}

/// Press entry without a store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PressSeed {
    /// Press name.
    pub name: String,
    /// Contact address, when known.
    #[serde(default)]
    pub email: Option<String>,
    /// Kind of publication the press issues.
    pub category: PressCategorySeed,
}

/// Publication category in the seed format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressCategorySeed {
    /// Printed books.
    Book,
    /// Periodicals.
    Magazine,
    /// Electronic books.
    EBook,
}
