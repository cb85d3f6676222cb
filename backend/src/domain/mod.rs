//! Domain primitives, services, and ports.
//!
//! Purpose: define the book catalogue entities and the use-cases the HTTP
//! adapter drives. Nothing here depends on actix or on a concrete store.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - Book, Press, Address and their identifiers.
//! - BookCatalogueService: seeding barrier plus reads.
//! - ports: repository, query, and message bus traits.

mod book;
mod book_catalogue_service;
mod book_seeder;
pub mod error;
pub mod ports;
mod trace_id;

pub use self::book::{
    Address, Book, BookId, NewBook, NewPress, Press, PressCategory, PressId,
};
pub use self::book_catalogue_service::BookCatalogueService;
pub use self::book_seeder::{BookSeedOutcome, BookSeeder, BookSeedingError};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use bookshelf::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such book"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
