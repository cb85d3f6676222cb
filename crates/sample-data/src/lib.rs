//! Fixed sample book catalogue for seeding the Bookshelf data store.
//!
//! The crate owns the built-in seed list and the JSON format used to override
//! it. It is deliberately independent of backend domain types so the backend
//! decides how seeds become entities and identifiers.
//!
//! # Example
//!
//! ```
//! use sample_data::SeedCatalogue;
//!
//! let catalogue = SeedCatalogue::builtin().expect("built-in catalogue parses");
//! assert_eq!(catalogue.book_count(), 2);
//! assert_eq!(catalogue.books()[0].press.name, "Addison-Wesley");
//! ```

mod catalogue;
mod error;
mod seed;

pub use catalogue::SeedCatalogue;
pub use error::CatalogueError;
pub use seed::{AddressSeed, BookSeed, PressCategorySeed, PressSeed};
