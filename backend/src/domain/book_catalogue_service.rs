//! Read service backing the book endpoints.
//!
//! Every read waits on a one-time seeding barrier. The first caller runs the
//! seeder; concurrent callers await the same initialisation, so the seed set
//! is inserted at most once per process. A failed seeding pass leaves the
//! barrier unset and the next read retries it.

use std::sync::Arc;

use async_trait::async_trait;
use sample_data::SeedCatalogue;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::domain::ports::{BookRepository, BookRepositoryError, BooksQuery, SeedingResult};
use crate::domain::{Book, BookId, BookSeedOutcome, BookSeeder, BookSeedingError, Error};

/// Catalogue reads guarded by a one-time seeding barrier.
pub struct BookCatalogueService {
    repository: Arc<dyn BookRepository>,
    seeder: BookSeeder<dyn BookRepository>,
    catalogue: SeedCatalogue,
    seeded: OnceCell<BookSeedOutcome>,
}

impl BookCatalogueService {
    /// Build the service over `repository`, seeding from `catalogue` on first
    /// use.
    pub fn new(repository: Arc<dyn BookRepository>, catalogue: SeedCatalogue) -> Self {
        Self {
            seeder: BookSeeder::new(Arc::clone(&repository)),
            repository,
            catalogue,
            seeded: OnceCell::new(),
        }
    }

    /// Run the seeding pass unless it already completed.
    ///
    /// # Errors
    ///
    /// Returns [`BookSeedingError`] when the repository rejects the seed set.
    pub async fn ensure_seeded(&self) -> Result<BookSeedOutcome, BookSeedingError> {
        let outcome = self
            .seeded
            .get_or_try_init(|| async {
                let outcome = self.seeder.seed(&self.catalogue).await?;
                match outcome.result {
                    SeedingResult::Applied => {
                        info!(book_count = outcome.book_count, "book store seeded");
                    }
                    SeedingResult::AlreadySeeded => {
                        info!("book store already populated; seeding skipped");
                    }
                }
                Ok::<_, BookSeedingError>(outcome)
            })
            .await?;
        Ok(*outcome)
    }

    /// Whether the seeding barrier has been passed.
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        self.seeded.initialized()
    }

    async fn ready_repository(&self) -> Result<&dyn BookRepository, Error> {
        self.ensure_seeded().await.map_err(|err| {
            warn!(error = %err, "book store seeding failed");
            match err {
                BookSeedingError::Persistence(inner) => map_repository_error(inner),
            }
        })?;
        Ok(self.repository.as_ref())
    }
}

fn map_repository_error(error: BookRepositoryError) -> Error {
    match error {
        BookRepositoryError::Unavailable { message } => {
            Error::service_unavailable(format!("book store unavailable: {message}"))
        }
        BookRepositoryError::Query { message } => {
            Error::internal(format!("book store error: {message}"))
        }
    }
}

#[async_trait]
impl BooksQuery for BookCatalogueService {
    async fn list_books(&self) -> Result<Vec<Book>, Error> {
        self.ready_repository()
            .await?
            .list()
            .await
            .map_err(map_repository_error)
    }

    async fn find_book(&self, id: BookId) -> Result<Option<Book>, Error> {
        self.ready_repository()
            .await?
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockBookRepository;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalogue() -> SeedCatalogue {
        SeedCatalogue::builtin().expect("builtin catalogue parses")
    }

    #[rstest]
    #[tokio::test]
    async fn seeds_once_across_reads(catalogue: SeedCatalogue) {
        let mut repo = MockBookRepository::new();
        repo.expect_seed_if_empty()
            .times(1)
            .returning(|_| Ok(SeedingResult::Applied));
        repo.expect_list().times(2).returning(|| Ok(Vec::new()));

        let service = BookCatalogueService::new(Arc::new(repo), catalogue);
        service.list_books().await.expect("first read");
        service.list_books().await.expect("second read");
        assert!(service.is_seeded());
    }

    #[rstest]
    #[tokio::test]
    async fn failed_seeding_is_retried_on_next_read(catalogue: SeedCatalogue) {
        let mut repo = MockBookRepository::new();
        let mut attempts = 0;
        repo.expect_seed_if_empty().times(2).returning(move |_| {
            attempts += 1;
            if attempts == 1 {
                Err(BookRepositoryError::unavailable("warming up"))
            } else {
                Ok(SeedingResult::Applied)
            }
        });
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = BookCatalogueService::new(Arc::new(repo), catalogue);
        let err = service
            .find_book(BookId::new(1))
            .await
            .expect_err("seeding fails first");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
        assert!(!service.is_seeded());

        let found = service.find_book(BookId::new(1)).await.expect("retry");
        assert!(found.is_none());
    }

    #[rstest]
    #[case(BookRepositoryError::unavailable("down"), ErrorCode::ServiceUnavailable)]
    #[case(BookRepositoryError::query("broken"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn maps_read_failures(
        catalogue: SeedCatalogue,
        #[case] failure: BookRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockBookRepository::new();
        repo.expect_seed_if_empty()
            .returning(|_| Ok(SeedingResult::AlreadySeeded));
        repo.expect_list().return_once(move || Err(failure));

        let service = BookCatalogueService::new(Arc::new(repo), catalogue);
        let err = service.list_books().await.expect_err("read fails");
        assert_eq!(err.code(), expected);
    }
}
