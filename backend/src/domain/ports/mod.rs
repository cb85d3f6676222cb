//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod book_repository;
mod books_query;
mod message_bus;

#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::{BookRepository, BookRepositoryError, SeedingResult};
#[cfg(test)]
pub use books_query::MockBooksQuery;
pub use books_query::{BooksQuery, FixtureBooksQuery};
pub use message_bus::{BusMessage, MESSAGES_QUEUE, MessageBus, MessageBusError};
