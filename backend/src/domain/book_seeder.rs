//! Seeding orchestration for the book store.
//!
//! Converts the sample-data catalogue into domain records and hands them to
//! the repository's atomic check-and-insert.

use std::sync::Arc;

use sample_data::{BookSeed, PressCategorySeed, SeedCatalogue};
use thiserror::Error;

use crate::domain::ports::{BookRepository, BookRepositoryError, SeedingResult};
use crate::domain::{Address, NewBook, NewPress, PressCategory};

/// Result of a seeding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookSeedOutcome {
    /// Number of books in the catalogue offered to the store.
    pub book_count: usize,
    /// Whether the store accepted them.
    pub result: SeedingResult,
}

/// Errors raised while seeding the book store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookSeedingError {
    /// The repository rejected the seed set.
    #[error("book seeding persistence error: {0}")]
    Persistence(#[from] BookRepositoryError),
}

/// Service that seeds the book store from a catalogue.
pub struct BookSeeder<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> BookSeeder<R> {
    /// Create a seeder over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> BookSeeder<R>
where
    R: BookRepository + ?Sized,
{
    /// Insert every catalogue book unless the store already holds books.
    ///
    /// # Errors
    ///
    /// Returns [`BookSeedingError`] when the repository fails.
    pub async fn seed(
        &self,
        catalogue: &SeedCatalogue,
    ) -> Result<BookSeedOutcome, BookSeedingError> {
        let books: Vec<NewBook> = catalogue.books().iter().cloned().map(convert_seed).collect();
        let book_count = books.len();
        let result = self.repository.seed_if_empty(books).await?;
        Ok(BookSeedOutcome { book_count, result })
    }
}

fn convert_seed(seed: BookSeed) -> NewBook {
    NewBook {
        isbn: seed.isbn,
        title: seed.title,
        author: seed.author,
        price_cents: seed.price_cents,
        location: Address {
            city: seed.location.city,
            street: seed.location.street,
        },
        press: NewPress {
            name: seed.press.name,
            email: seed.press.email,
            category: map_category(seed.press.category),
        },
    }
}

fn map_category(category: PressCategorySeed) -> PressCategory {
    match category {
        PressCategorySeed::Book => PressCategory::Book,
        PressCategorySeed::Magazine => PressCategory::Magazine,
        PressCategorySeed::EBook => PressCategory::EBook,
    }
}
