//! Startup seeding orchestration.

use std::io;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use sample_data::{CatalogueError, SeedCatalogue};
use thiserror::Error;
use tracing::info;

use crate::domain::{BookCatalogueService, BookSeedOutcome, BookSeedingError};

/// Errors returned while preparing or running startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Catalogue file could not be read.
    #[error("failed to read seed catalogue at {path}: {source}")]
    CatalogueRead {
        /// Path to the catalogue file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Catalogue content was rejected.
    #[error("seed catalogue error: {0}")]
    Catalogue(#[from] CatalogueError),
    /// The store rejected the seed set.
    #[error("book seeding error: {0}")]
    Seeding(#[from] BookSeedingError),
}

/// Load the seed catalogue from `path`, or the built-in one when absent.
///
/// # Errors
///
/// Returns [`StartupSeedingError`] when the file cannot be read or does not
/// hold a valid catalogue.
pub fn load_catalogue(path: Option<&Path>) -> Result<SeedCatalogue, StartupSeedingError> {
    match path {
        None => {
            info!(source = "builtin", "loading seed catalogue");
            Ok(SeedCatalogue::builtin()?)
        }
        Some(path) => {
            info!(source = %path.display(), "loading seed catalogue");
            let contents = read_catalogue_file(path)?;
            Ok(SeedCatalogue::from_json(&contents)?)
        }
    }
}

fn read_catalogue_file(path: &Path) -> Result<String, StartupSeedingError> {
    let read_error = |source: io::Error| StartupSeedingError::CatalogueRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "seed catalogue path must name a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read_to_string(Path::new(file_name)).map_err(read_error)
}

/// Seed the store before the server starts taking traffic.
///
/// Passes through the same barrier as request-path reads, so a later read
/// never seeds again.
///
/// # Errors
///
/// Returns [`StartupSeedingError::Seeding`] when the store rejects the seed
/// set.
pub async fn seed_books_on_startup(
    service: &BookCatalogueService,
) -> Result<BookSeedOutcome, StartupSeedingError> {
    let outcome = service.ensure_seeded().await?;
    info!(
        book_count = outcome.book_count,
        result = ?outcome.result,
        "startup seeding finished"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;

    use rstest::rstest;
    use tempfile::NamedTempFile;

    use crate::domain::ports::{BookRepository, SeedingResult};
    use crate::outbound::persistence::InMemoryBookRepository;

    const ONE_BOOK: &str = r#"{
        "version": 1,
        "books": [{
            "isbn": "1", "title": "Solo", "author": "A", "priceCents": 1,
            "location": {"city": "C", "street": "S"},
            "press": {"name": "P", "email": "p@example.com", "category": "magazine"}
        }]
    }"#;

    #[rstest]
    fn builtin_catalogue_is_used_without_a_path() {
        let catalogue = load_catalogue(None).expect("builtin loads");
        assert_eq!(catalogue.book_count(), 2);
    }

    #[rstest]
    fn file_catalogue_replaces_builtin() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(ONE_BOOK.as_bytes()).expect("write catalogue");

        let catalogue = load_catalogue(Some(file.path())).expect("file loads");
        assert_eq!(catalogue.books()[0].title, "Solo");
    }

    #[rstest]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");
        let err = load_catalogue(Some(&path)).expect_err("missing file");
        assert!(matches!(err, StartupSeedingError::CatalogueRead { .. }));
    }

    #[rstest]
    fn invalid_content_is_a_catalogue_error() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(br#"{"version": 1, "books": []}"#)
            .expect("write catalogue");
        let err = load_catalogue(Some(file.path())).expect_err("empty catalogue");
        assert!(matches!(
            err,
            StartupSeedingError::Catalogue(CatalogueError::EmptyBooks)
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn startup_seeding_populates_store_once() {
        let repository = Arc::new(InMemoryBookRepository::new());
        let catalogue = load_catalogue(None).expect("builtin loads");
        let service = BookCatalogueService::new(repository.clone(), catalogue);

        let outcome = seed_books_on_startup(&service).await.expect("seeding");
        assert_eq!(outcome.result, SeedingResult::Applied);

        let again = seed_books_on_startup(&service).await.expect("seeding");
        assert_eq!(again, outcome);
        assert_eq!(repository.count().await.expect("count"), 2);
    }
}
