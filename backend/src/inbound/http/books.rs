//! Book collection and entity endpoints.
//!
//! ```text
//! GET /odata/Books
//! GET /odata/Books({key})
//! GET /odata/Books/{key}
//! ```

use actix_web::{HttpRequest, HttpResponse, get, web};
use odata_support::{ODataCollection, ODataEntity, QueryOptionError, QueryOptions, context_url};
use serde_json::json;
use tracing::debug;

use super::ApiResult;
use super::dto::BookDto;
use super::media::ResponseFormat;
use super::odata::{BOOKS_SET, ODATA_ROOT};
use super::state::{HttpState, NotFoundPolicy};
use crate::domain::{BookId, Error};

fn invalid_option(error: &QueryOptionError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({ "option": error.option() }))
}

/// List every book, optionally paged with `$top`, `$skip` and `$count`.
#[utoipa::path(
    get,
    path = "/odata/Books",
    tags = ["books"],
    operation_id = "listBooks",
    params(
        ("$top" = Option<u64>, Query, description = "Maximum number of books to return"),
        ("$skip" = Option<u64>, Query, description = "Number of leading books to omit"),
        ("$count" = Option<bool>, Query, description = "Include the unpaged total as `@odata.count`")
    ),
    responses(
        (status = 200, description = "Books in store order. `application/yaml` responses carry no body.",
            content(
                (super::schemas::BookCollectionSchema = "application/json"),
                (super::schemas::BookCollectionSchema = "application/prs.odatatestxx-odata"),
                ("application/yaml")
            )),
        (status = 400, description = "Unsupported or malformed query option", body = super::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = super::schemas::ErrorSchema)
    )
)]
#[get("/Books")]
pub async fn list_books(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    let options = QueryOptions::parse(request.query_string()).map_err(|err| invalid_option(&err))?;
    let books = state.books.list_books().await?;
    let page = options.apply(books).map(|book| BookDto::from(&book));
    let envelope = ODataCollection::new(context_url(ODATA_ROOT, BOOKS_SET, false), page);
    ResponseFormat::negotiate(&request).ok(&envelope)
}

async fn book_response(
    state: &HttpState,
    request: &HttpRequest,
    key: i32,
) -> ApiResult<HttpResponse> {
    match state.books.find_book(BookId::new(key)).await? {
        Some(book) => {
            let entity = ODataEntity::new(
                context_url(ODATA_ROOT, BOOKS_SET, true),
                BookDto::from(&book),
            );
            ResponseFormat::negotiate(request).ok(&entity)
        }
        None => match state.not_found {
            NotFoundPolicy::Permissive => {
                debug!(key, "no book with key; answering with an empty success");
                Ok(HttpResponse::NoContent().finish())
            }
            NotFoundPolicy::Strict => Err(Error::not_found(format!("book {key} not found"))),
        },
    }
}

/// Fetch one book by key using OData key syntax.
#[utoipa::path(
    get,
    path = "/odata/Books({key})",
    tags = ["books"],
    operation_id = "getBook",
    params(("key" = i32, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "The matching book",
            content(
                (super::schemas::BookEntitySchema = "application/json"),
                (super::schemas::BookEntitySchema = "application/prs.odatatestxx-odata"),
                ("application/yaml")
            )),
        (status = 204, description = "No book matches (default policy)"),
        (status = 404, description = "No book matches (strict policy) or the key is not an integer",
            body = super::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = super::schemas::ErrorSchema)
    )
)]
#[get("/Books({key})")]
pub async fn get_book(
    state: web::Data<HttpState>,
    request: HttpRequest,
    key: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    book_response(&state, &request, key.into_inner()).await
}

/// Fetch one book by key using a path segment.
#[utoipa::path(
    get,
    path = "/odata/Books/{key}",
    tags = ["books"],
    operation_id = "getBookBySegment",
    params(("key" = i32, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "The matching book",
            content(
                (super::schemas::BookEntitySchema = "application/json"),
                (super::schemas::BookEntitySchema = "application/prs.odatatestxx-odata"),
                ("application/yaml")
            )),
        (status = 204, description = "No book matches (default policy)"),
        (status = 404, description = "No book matches (strict policy) or the key is not an integer",
            body = super::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = super::schemas::ErrorSchema)
    )
)]
#[get("/Books/{key}")]
pub async fn get_book_by_segment(
    state: web::Data<HttpState>,
    request: HttpRequest,
    key: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    book_response(&state, &request, key.into_inner()).await
}
