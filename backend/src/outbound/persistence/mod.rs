//! Storage adapters implementing the domain repository ports.

mod in_memory_book_repository;

pub use in_memory_book_repository::InMemoryBookRepository;
