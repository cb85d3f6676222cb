//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] gathers the OData, health and schema definitions from the
//! inbound layer and adds the API key security scheme. The document backs
//! Swagger UI, ReDoc, and the `openapi-dump` binary.

use crate::inbound::http::dto::{AddressDto, BookDto, PressCategoryDto, PressDto};
use crate::inbound::http::schemas::{
    BookCollectionSchema, BookEntitySchema, EntitySetSchema, ErrorCodeSchema, ErrorSchema,
    ServiceDocumentSchema,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the security scheme in the generated document.
pub const API_KEY_SCHEME: &str = "API_HEADER";
/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "API-KEY";

/// Declare the API key header scheme. Requests are not checked against it.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            API_KEY_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                API_KEY_HEADER,
                "X-API-KEY",
            ))),
        );
    }
}

/// OpenAPI document for the Bookshelf API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "template-identifier WEB API",
        version = "v1",
        description = "A templated ASP.NET Core web API",
        terms_of_service = "None",
        contact(name = "Insert Contact Name Here", url = "http://example.com/contact"),
        license(name = "Use under LICX", url = "https://example.com/license")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("API_HEADER" = [])),
    paths(
        crate::inbound::http::odata::service_document,
        crate::inbound::http::odata::metadata,
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::get_book,
        crate::inbound::http::books::get_book_by_segment,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        BookDto,
        AddressDto,
        PressDto,
        PressCategoryDto,
        BookCollectionSchema,
        BookEntitySchema,
        EntitySetSchema,
        ServiceDocumentSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "books", description = "Book catalogue entity set"),
        (name = "odata", description = "OData service root and metadata"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
