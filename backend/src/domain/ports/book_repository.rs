//! Driven port for the book store.
//!
//! The store assigns identifiers on insert and exposes no update or delete
//! operations. Seeding goes through [`BookRepository::seed_if_empty`], which
//! adapters must implement as a single atomic check-and-insert so concurrent
//! callers never duplicate the seed set.

use async_trait::async_trait;

use crate::domain::{Book, BookId, NewBook};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by book repository adapters.
    pub enum BookRepositoryError {
        /// The backing store could not be reached.
        Unavailable { message: String } => "book store is unavailable: {message}",
        /// A read or insert failed during execution.
        Query { message: String } => "book store query failed: {message}",
    }
}

/// Result of a seeding attempt.
///
/// `AlreadySeeded` is not an error: it tells the caller another seeding pass
/// won the race or the store was populated beforehand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingResult {
    /// The store was empty and the books were inserted.
    Applied,
    /// The store already held books; nothing was inserted.
    AlreadySeeded,
}

/// Port for reading and seeding the book store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert `books` in order if and only if the store holds no books.
    ///
    /// Book and press identifiers are assigned sequentially from 1.
    async fn seed_if_empty(&self, books: Vec<NewBook>)
    -> Result<SeedingResult, BookRepositoryError>;

    /// Every book in insertion order.
    async fn list(&self) -> Result<Vec<Book>, BookRepositoryError>;

    /// The book with `id`, if present.
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookRepositoryError>;

    /// Number of stored books.
    async fn count(&self) -> Result<usize, BookRepositoryError>;
}
