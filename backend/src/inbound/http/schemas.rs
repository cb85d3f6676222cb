//! OpenAPI schema definitions for types that do not derive `ToSchema`.
//!
//! Domain errors and the generic OData envelopes stay free of utoipa. The
//! wrappers here mirror their serialised shape for documentation only.

use serde::Serialize;
use utoipa::ToSchema;

use super::dto::BookDto;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or names an unsupported option.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing store is temporarily unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "unsupported query option `$filter`")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for the `Books` collection envelope.
#[derive(ToSchema)]
#[schema(as = BookCollection)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct BookCollectionSchema {
    /// Metadata context URL.
    #[schema(rename = "@odata.context", example = "/odata/$metadata#Books")]
    context: String,
    /// Unpaged collection size, present when `$count=true`.
    #[schema(rename = "@odata.count", example = 2)]
    count: Option<u64>,
    /// Books after paging.
    value: Vec<BookDto>,
}

/// OpenAPI schema for a single `Book` entity response.
///
/// The book's properties sit beside the context annotation; `Serialize` is
/// derived so the schema derive honours `flatten`.
#[derive(Serialize, ToSchema)]
#[schema(as = BookEntity)]
pub struct BookEntitySchema {
    /// Metadata context URL.
    #[serde(rename = "@odata.context")]
    #[schema(example = "/odata/$metadata#Books/$entity")]
    context: String,
    /// Entity properties.
    #[serde(flatten)]
    book: BookDto,
}

/// OpenAPI schema for an entity set entry in the service document.
#[derive(ToSchema)]
#[schema(as = EntitySet)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct EntitySetSchema {
    /// Entity set name.
    #[schema(example = "Books")]
    name: String,
    /// Always `EntitySet`.
    #[schema(example = "EntitySet")]
    kind: String,
    /// URL relative to the service root.
    #[schema(example = "Books")]
    url: String,
}

/// OpenAPI schema for the service document.
#[derive(ToSchema)]
#[schema(as = ServiceDocument)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ServiceDocumentSchema {
    /// Metadata document URL.
    #[schema(rename = "@odata.context", example = "/odata/$metadata")]
    context: String,
    /// Exposed entity sets.
    value: Vec<EntitySetSchema>,
}
