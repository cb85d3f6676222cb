//! Integration tests for the built-in seed catalogue.

use rstest::{fixture, rstest};
use sample_data::{PressCategorySeed, SeedCatalogue};

#[fixture]
fn catalogue() -> SeedCatalogue {
    SeedCatalogue::builtin().expect("built-in catalogue parses")
}

#[rstest]
fn builtin_catalogue_lists_two_books(catalogue: SeedCatalogue) {
    assert_eq!(catalogue.book_count(), 2);
}

#[rstest]
fn builtin_books_keep_catalogue_order(catalogue: SeedCatalogue) {
    let titles: Vec<&str> = catalogue
        .books()
        .iter()
        .map(|book| book.title.as_str())
        .collect();
    assert_eq!(titles, ["Essential C#5.0", "Peopleware"]);
}

#[rstest]
fn every_builtin_book_has_a_press(catalogue: SeedCatalogue) {
    for book in catalogue.books() {
        assert!(!book.press.name.trim().is_empty());
    }
}

#[rstest]
fn builtin_presses_cover_print_and_electronic(catalogue: SeedCatalogue) {
    let categories: Vec<PressCategorySeed> = catalogue
        .into_books()
        .into_iter()
        .map(|book| book.press.category)
        .collect();
    assert_eq!(
        categories,
        [PressCategorySeed::Book, PressCategorySeed::EBook]
    );
}
