//! Startup wiring for book seeding.

mod startup;

pub use startup::{StartupSeedingError, load_catalogue, seed_books_on_startup};
