//! Seed catalogue parsing and validation.
//!
//! The catalogue is a versioned JSON document listing the books (and their
//! presses) inserted when the store is first seeded. The built-in catalogue
//! is compiled into the crate; deployments may supply their own file in the
//! same format.

use serde::Deserialize;

use crate::error::CatalogueError;
use crate::seed::BookSeed;

/// Current supported catalogue version.
const SUPPORTED_VERSION: u32 = 1;

/// Catalogue shipped with the crate.
const BUILTIN_CATALOGUE: &str = include_str!("../data/books.json");

/// A validated, ordered list of seed books.
///
/// # Example
///
/// ```
/// use sample_data::SeedCatalogue;
///
/// let json = r#"{
///     "version": 1,
///     "books": [{
///         "isbn": "978-0-13-110362-7",
///         "title": "The C Programming Language",
///         "author": "Kernighan and Ritchie",
///         "priceCents": 4999,
///         "location": {"city": "Murray Hill", "street": "600 Mountain Ave"},
///         "press": {"name": "Prentice Hall", "category": "book"}
///     }]
/// }"#;
///
/// let catalogue = SeedCatalogue::from_json(json).expect("valid catalogue");
/// assert_eq!(catalogue.book_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedCatalogue {
    books: Vec<BookSeed>,
}

impl SeedCatalogue {
    /// Returns the catalogue compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if the embedded document fails validation,
    /// which indicates a packaging defect rather than a runtime condition.
    pub fn builtin() -> Result<Self, CatalogueError> {
        Self::from_json(BUILTIN_CATALOGUE)
    }

    /// Parses a catalogue from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if:
    /// - The JSON is malformed or carries unknown fields
    /// - The version is unsupported
    /// - The books array is empty
    /// - A book has a blank ISBN, title, author, or press name
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let raw: RawSeedCatalogue =
            serde_json::from_str(json).map_err(|e| CatalogueError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSeedCatalogue) -> Result<Self, CatalogueError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(CatalogueError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.books.is_empty() {
            return Err(CatalogueError::EmptyBooks);
        }

        for (index, book) in raw.books.iter().enumerate() {
            validate_book(index, book)?;
        }

        Ok(Self { books: raw.books })
    }

    /// Returns the seed books in catalogue order.
    #[must_use]
    pub fn books(&self) -> &[BookSeed] {
        &self.books
    }

    /// Returns the number of seed books.
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Consumes the catalogue, yielding the seed books in order.
    #[must_use]
    pub fn into_books(self) -> Vec<BookSeed> {
        self.books
    }
}

fn validate_book(index: usize, book: &BookSeed) -> Result<(), CatalogueError> {
    let fields = [
        ("isbn", book.isbn.as_str()),
        ("title", book.title.as_str()),
        ("author", book.author.as_str()),
        ("press name", book.press.name.as_str()),
    ];
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some(&(field, _)) => Err(CatalogueError::BlankField { index, field }),
        None => Ok(()),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSeedCatalogue {
    version: u32,
    books: Vec<BookSeed>,
}
