//! Concurrent first reads against an empty store seed it exactly once.

use std::sync::Arc;

use bookshelf::domain::BookCatalogueService;
use bookshelf::domain::ports::{BookRepository, BooksQuery, SeedingResult};
use bookshelf::outbound::persistence::InMemoryBookRepository;
use rstest::rstest;
use sample_data::SeedCatalogue;

#[rstest]
#[case(2)]
#[case(32)]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_reads_never_exceed_seed_count(#[case] readers: usize) {
    let repository = Arc::new(InMemoryBookRepository::new());
    let catalogue = SeedCatalogue::builtin().expect("builtin catalogue");
    let seed_count = catalogue.book_count();
    let service = Arc::new(BookCatalogueService::new(repository.clone(), catalogue));

    let handles: Vec<_> = (0..readers)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.list_books().await })
        })
        .collect();

    for handle in handles {
        let books = handle.await.expect("reader task").expect("list books");
        assert_eq!(books.len(), seed_count);
    }

    assert_eq!(repository.count().await.expect("count"), seed_count);
    let outcome = service.ensure_seeded().await.expect("seeded");
    assert_eq!(outcome.result, SeedingResult::Applied);
}

#[rstest]
#[tokio::test]
async fn a_prepopulated_store_is_left_alone() {
    let repository = Arc::new(InMemoryBookRepository::new());
    let first = BookCatalogueService::new(
        repository.clone(),
        SeedCatalogue::builtin().expect("builtin catalogue"),
    );
    first.ensure_seeded().await.expect("first seeding");

    let second = BookCatalogueService::new(
        repository.clone(),
        SeedCatalogue::builtin().expect("builtin catalogue"),
    );
    let outcome = second.ensure_seeded().await.expect("second seeding");

    assert_eq!(outcome.result, SeedingResult::AlreadySeeded);
    assert_eq!(repository.count().await.expect("count"), 2);
}
