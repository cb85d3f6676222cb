//! Process-local book store.
//!
//! Records live behind a single `RwLock`, so the emptiness check and the
//! insert in [`BookRepository::seed_if_empty`] happen under one write guard.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{BookRepository, BookRepositoryError, SeedingResult};
use crate::domain::{Book, BookId, NewBook, PressId};

#[derive(Debug)]
struct StoreState {
    books: Vec<Book>,
    next_book_id: i32,
    next_press_id: i32,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            next_book_id: 1,
            next_press_id: 1,
        }
    }
}

impl StoreState {
    fn insert(&mut self, book: NewBook) -> Result<(), BookRepositoryError> {
        let book_id = take_id(&mut self.next_book_id, "book")?;
        let press_id = take_id(&mut self.next_press_id, "press")?;
        self.books
            .push(book.into_book(BookId::new(book_id), PressId::new(press_id)));
        Ok(())
    }
}

fn take_id(next: &mut i32, kind: &str) -> Result<i32, BookRepositoryError> {
    let id = *next;
    *next = id
        .checked_add(1)
        .ok_or_else(|| BookRepositoryError::query(format!("{kind} identifiers exhausted")))?;
    Ok(id)
}

/// In-memory [`BookRepository`] adapter.
///
/// # Examples
/// ```
/// use bookshelf::domain::BookId;
/// use bookshelf::domain::ports::BookRepository;
/// use bookshelf::outbound::persistence::InMemoryBookRepository;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let repo = InMemoryBookRepository::new();
/// assert_eq!(repo.count().await.expect("count"), 0);
/// assert!(repo.find_by_id(BookId::new(1)).await.expect("lookup").is_none());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    state: RwLock<StoreState>,
}

impl InMemoryBookRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn seed_if_empty(
        &self,
        books: Vec<NewBook>,
    ) -> Result<SeedingResult, BookRepositoryError> {
        let mut state = self.state.write().await;
        if !state.books.is_empty() {
            return Ok(SeedingResult::AlreadySeeded);
        }
        // Stage into a copy so a mid-batch failure leaves the store untouched.
        let mut staged = StoreState::default();
        for book in books {
            staged.insert(book)?;
        }
        *state = staged;
        Ok(SeedingResult::Applied)
    }

    async fn list(&self) -> Result<Vec<Book>, BookRepositoryError> {
        Ok(self.state.read().await.books.clone())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookRepositoryError> {
        let state = self.state.read().await;
        Ok(state.books.iter().find(|book| book.id() == id).cloned())
    }

    async fn count(&self) -> Result<usize, BookRepositoryError> {
        Ok(self.state.read().await.books.len())
    }
}
