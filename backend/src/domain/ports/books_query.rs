//! Driving port for book reads.
//!
//! HTTP handlers depend on this port rather than the repository so the
//! seeding barrier and error mapping stay in the domain.

use async_trait::async_trait;

use crate::domain::{Address, Book, BookId, Error, NewBook, NewPress, PressCategory, PressId};

/// Domain use-case port for reading the catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksQuery: Send + Sync {
    /// Every book in store order.
    async fn list_books(&self) -> Result<Vec<Book>, Error>;

    /// The book with `id`, or `None` when no such book exists.
    async fn find_book(&self, id: BookId) -> Result<Option<Book>, Error>;
}

/// Deterministic single-book query for adapter tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBooksQuery;

impl FixtureBooksQuery {
    fn fixture() -> Book {
        NewBook {
            isbn: "978-0-201-83595-3".to_owned(),
            title: "The Mythical Man-Month".to_owned(),
            author: "Frederick P. Brooks".to_owned(),
            price_cents: 2999,
            location: Address {
                city: "Boston".to_owned(),
                street: "Arlington ST".to_owned(),
            },
            press: NewPress {
                name: "Addison-Wesley".to_owned(),
                email: Some("info@example.com".to_owned()),
                category: PressCategory::Book,
            },
        }
        .into_book(BookId::new(1), PressId::new(1))
    }
}

#[async_trait]
impl BooksQuery for FixtureBooksQuery {
    async fn list_books(&self) -> Result<Vec<Book>, Error> {
        Ok(vec![Self::fixture()])
    }

    async fn find_book(&self, id: BookId) -> Result<Option<Book>, Error> {
        let book = Self::fixture();
        Ok((book.id() == id).then_some(book))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_query_finds_only_its_book() {
        let query = FixtureBooksQuery;
        let found = query.find_book(BookId::new(1)).await.expect("lookup");
        assert_eq!(found.map(|book| book.id()), Some(BookId::new(1)));
        assert!(query.find_book(BookId::new(2)).await.expect("lookup").is_none());
    }
}
