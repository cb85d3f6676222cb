//! Behaviour tests for the OData book endpoints against the in-memory store.
//!
//! Each request runs on the world's current-thread runtime inside a fresh
//! `LocalSet`, because Actix spawns local tasks while serving.

use std::sync::Arc;

use actix_web::http::header;
use actix_web::test as actix_test;
use actix_web::{App, web};
use bookshelf::Trace;
use bookshelf::domain::BookCatalogueService;
use bookshelf::domain::ports::BookRepository;
use bookshelf::inbound::http::configure_odata;
use bookshelf::inbound::http::state::{HttpState, NotFoundPolicy};
use bookshelf::outbound::persistence::InMemoryBookRepository;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use sample_data::SeedCatalogue;
use serde_json::Value;
use tokio::runtime::{Builder, Runtime};
use tokio::task::LocalSet;

/// Wrapper for non-Clone runtime handle.
#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

#[derive(Clone, Debug)]
struct CapturedResponse {
    status: u16,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl CapturedResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("JSON body")
    }
}

#[derive(Default, ScenarioState)]
struct BooksWorld {
    runtime: Slot<RuntimeHandle>,
    repository: Slot<Arc<InMemoryBookRepository>>,
    service: Slot<Arc<BookCatalogueService>>,
    policy: Slot<NotFoundPolicy>,
    accept: Slot<String>,
    last_response: Slot<CapturedResponse>,
    listings: Slot<Vec<Value>>,
}

impl BooksWorld {
    fn build_store(&self) {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("create runtime");
        let repository = Arc::new(InMemoryBookRepository::new());
        let catalogue = SeedCatalogue::builtin().expect("builtin catalogue");
        let service = Arc::new(BookCatalogueService::new(repository.clone(), catalogue));

        self.runtime.set(RuntimeHandle(Arc::new(runtime)));
        self.repository.set(repository);
        self.service.set(service);
    }

    fn runtime(&self) -> Arc<Runtime> {
        self.runtime.get().expect("runtime").0
    }

    fn perform(&self, path: &str) -> CapturedResponse {
        let runtime = self.runtime();
        let service = self.service.get().expect("book store");
        let policy = self.policy.get().unwrap_or_default();
        let accept = self.accept.get();
        let path = path.to_owned();

        LocalSet::new().block_on(&runtime, async move {
            let state = HttpState::new(service).with_not_found_policy(policy);
            let app = actix_test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .wrap(Trace)
                    .configure(configure_odata),
            )
            .await;

            let mut request = actix_test::TestRequest::get().uri(&path);
            if let Some(accept) = accept {
                request = request.insert_header((header::ACCEPT, accept));
            }
            let response = actix_test::call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = actix_test::read_body(response).await.to_vec();
            CapturedResponse {
                status,
                content_type,
                body,
            }
        })
    }

    fn last_response(&self) -> CapturedResponse {
        self.last_response.get().expect("response captured")
    }
}

#[fixture]
fn world() -> BooksWorld {
    BooksWorld::default()
}

// -----------------------------------------------------------------------------
// Given Steps
// -----------------------------------------------------------------------------

#[given("a seeded book store")]
fn a_seeded_book_store(world: &BooksWorld) {
    world.build_store();
    let service = world.service.get().expect("book store");
    world
        .runtime()
        .block_on(service.ensure_seeded())
        .expect("seeding succeeds");
}

#[given("an unseeded book store")]
fn an_unseeded_book_store(world: &BooksWorld) {
    world.build_store();
}

#[given("strict not-found handling")]
fn strict_not_found_handling(world: &BooksWorld) {
    world.policy.set(NotFoundPolicy::Strict);
}

#[given("the client accepts {media}")]
fn the_client_accepts(world: &BooksWorld, media: String) {
    world.accept.set(media);
}

// -----------------------------------------------------------------------------
// When Steps
// -----------------------------------------------------------------------------

#[when("the client requests {path}")]
fn the_client_requests(world: &BooksWorld, path: String) {
    let response = world.perform(&path);
    world.last_response.set(response);
}

#[when("the client lists the books twice")]
fn the_client_lists_the_books_twice(world: &BooksWorld) {
    let listings = (0..2)
        .map(|_| world.perform("/odata/Books").json())
        .collect();
    world.listings.set(listings);
}

// -----------------------------------------------------------------------------
// Then Steps
// -----------------------------------------------------------------------------

#[then("the response status is {status}")]
fn the_response_status_is(world: &BooksWorld, status: u16) {
    assert_eq!(world.last_response().status, status);
}

#[then("the collection holds {count} books")]
fn the_collection_holds_books(world: &BooksWorld, count: usize) {
    let body = world.last_response().json();
    let books = body["value"].as_array().expect("value array");
    assert_eq!(books.len(), count);
}

#[then("every book has a press")]
fn every_book_has_a_press(world: &BooksWorld) {
    let body = world.last_response().json();
    let books = body["value"].as_array().expect("value array");
    for book in books {
        assert!(
            book["press"]["name"].as_str().is_some_and(|name| !name.is_empty()),
            "book {book} should carry a named press"
        );
    }
}

#[then("the store holds {count} books")]
fn the_store_holds_books(world: &BooksWorld, count: usize) {
    let repository = world.repository.get().expect("repository");
    let stored = world
        .runtime()
        .block_on(repository.count())
        .expect("count books");
    assert_eq!(stored, count);
}

#[then("the book title is {title}")]
fn the_book_title_is(world: &BooksWorld, title: String) {
    let body = world.last_response().json();
    assert_eq!(body["title"].as_str(), Some(title.trim_matches('"')));
}

#[then("the response body is empty")]
fn the_response_body_is_empty(world: &BooksWorld) {
    assert!(world.last_response().body.is_empty());
}

#[then("the content type is {media}")]
fn the_content_type_is(world: &BooksWorld, media: String) {
    let content_type = world.last_response().content_type.expect("content type");
    assert!(
        content_type.starts_with(&media),
        "expected {media}, got {content_type}"
    );
}

#[then("the error code is {code}")]
fn the_error_code_is(world: &BooksWorld, code: String) {
    let body = world.last_response().json();
    assert_eq!(body["code"].as_str(), Some(code.trim_matches('"')));
}

#[then("both listings are identical")]
fn both_listings_are_identical(world: &BooksWorld) {
    let listings = world.listings.get().expect("listings captured");
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0], listings[1]);
}

#[scenario(
    path = "tests/features/books_endpoints.feature",
    name = "Listing the seeded catalogue"
)]
fn listing_the_seeded_catalogue(world: BooksWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/books_endpoints.feature",
    name = "Listing twice returns the same books"
)]
fn listing_twice_returns_the_same_books(world: BooksWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/books_endpoints.feature",
    name = "The first read seeds an empty store"
)]
fn the_first_read_seeds_an_empty_store(world: BooksWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/books_endpoints.feature",
    name = "Fetching a seeded book by key"
)]
fn fetching_a_seeded_book_by_key(world: BooksWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/books_endpoints.feature",
    name = "Fetching a seeded book by key segment"
)]
fn fetching_a_seeded_book_by_key_segment(world: BooksWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/books_endpoints.feature",
    name = "Fetching an absent book succeeds with no content"
)]
fn fetching_an_absent_book_succeeds_with_no_content(world: BooksWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/books_endpoints.feature",
    name = "Strict handling reports absent books as not found"
)]
fn strict_handling_reports_absent_books_as_not_found(world: BooksWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/books_endpoints.feature",
    name = "A non-integer key does not match a route"
)]
fn a_non_integer_key_does_not_match_a_route(world: BooksWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/books_endpoints.feature",
    name = "YAML responses carry no body"
)]
fn yaml_responses_carry_no_body(world: BooksWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/books_endpoints.feature",
    name = "The vendor media type is served as JSON"
)]
fn the_vendor_media_type_is_served_as_json(world: BooksWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/books_endpoints.feature",
    name = "Unsupported query options are rejected"
)]
fn unsupported_query_options_are_rejected(world: BooksWorld) {
    drop(world);
}
