//! OData service root: the service document and the `$metadata` CSDL.

use actix_web::{HttpRequest, HttpResponse, get, http::header, web};
use odata_support::{ComplexType, EdmModel, EdmType, EntityType, EnumType, Property};
use tracing::error;

use super::ApiResult;
use super::media::ResponseFormat;
use super::state::HttpState;
use crate::domain::Error;

/// Path prefix of every OData route.
pub const ODATA_ROOT: &str = "/odata";
/// Entity set exposing books.
pub const BOOKS_SET: &str = "Books";

const NAMESPACE: &str = "Bookshelf";
const CONTAINER: &str = "Default";

/// Entity model for the catalogue.
///
/// Presses are modelled as a complex type because they are returned inline
/// with their book rather than through an entity set of their own.
#[must_use]
pub fn book_model() -> EdmModel {
    let complex = |name: &str| EdmType::Complex(name.to_owned());
    EdmModel::new(NAMESPACE, CONTAINER)
        .with_entity_set(
            BOOKS_SET,
            EntityType::new(
                "Book",
                "id",
                vec![
                    Property::required("id", EdmType::Int32),
                    Property::required("isbn", EdmType::String),
                    Property::required("title", EdmType::String),
                    Property::required("author", EdmType::String),
                    Property::required("priceCents", EdmType::Int64),
                    Property::required("location", complex("Address")),
                    Property::required("press", complex("Press")),
                ],
            ),
        )
        .with_complex_type(ComplexType::new(
            "Address",
            vec![
                Property::required("city", EdmType::String),
                Property::required("street", EdmType::String),
            ],
        ))
        .with_complex_type(ComplexType::new(
            "Press",
            vec![
                Property::required("id", EdmType::Int32),
                Property::required("name", EdmType::String),
                Property::optional("email", EdmType::String),
                Property::required("category", EdmType::Enum("PressCategory".to_owned())),
            ],
        ))
        .with_enum_type(EnumType::new("PressCategory", &["Book", "Magazine", "EBook"]))
}

/// OData service document listing the exposed entity sets.
#[utoipa::path(
    get,
    path = "/odata",
    tags = ["odata"],
    operation_id = "getServiceDocument",
    responses(
        (status = 200, description = "Service document",
            content(
                (super::schemas::ServiceDocumentSchema = "application/json"),
                (super::schemas::ServiceDocumentSchema = "application/prs.odatatestxx-odata"),
                ("application/yaml")
            ))
    )
)]
#[get("")]
pub async fn service_document(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    let document = state.model.service_document(ODATA_ROOT);
    ResponseFormat::negotiate(&request).ok(&document)
}

/// CSDL description of the entity model.
#[utoipa::path(
    get,
    path = "/odata/$metadata",
    tags = ["odata"],
    operation_id = "getMetadata",
    responses(
        (status = 200, description = "CSDL 4.0 document", body = String, content_type = "application/xml")
    )
)]
#[get("/$metadata")]
pub async fn metadata(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let xml = state.model.to_csdl_xml().map_err(|err| {
        error!(error = %err, "CSDL rendering failed");
        Error::internal("metadata document could not be rendered")
    })?;
    Ok(HttpResponse::Ok()
        .content_type("application/xml")
        .insert_header((header::HeaderName::from_static("odata-version"), "4.0"))
        .body(xml))
}
