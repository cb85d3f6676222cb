//! Response media negotiation for the OData endpoints.
//!
//! JSON is the default. The OData vendor media type is answered with a JSON
//! body under its own content type. YAML is advertised but its formatter
//! writes nothing, so YAML responses keep the status and content type and
//! carry an empty body.

use actix_web::http::StatusCode;
use actix_web::http::header::{Accept, Header, Quality};
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::debug;

use crate::domain::Error;

/// Default JSON media type.
pub const JSON_MEDIA_TYPE: &str = "application/json";
/// OData vendor media type served as JSON.
pub const ODATA_VENDOR_MEDIA_TYPE: &str = "application/prs.odatatestxx-odata";
/// YAML media type; responses carry no body.
pub const YAML_MEDIA_TYPE: &str = "application/yaml";

/// Media type chosen for a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// `application/json`.
    Json,
    /// `application/prs.odatatestxx-odata` with a JSON body.
    VendorJson,
    /// `application/yaml` with an empty body.
    Yaml,
}

impl ResponseFormat {
    /// Pick the highest-ranked supported type from the `Accept` header.
    ///
    /// Entries weighted `q=0` are refused by the client and never chosen.
    /// Missing, malformed, or entirely unsupported headers fall back to JSON.
    #[must_use]
    pub fn negotiate(request: &HttpRequest) -> Self {
        let Ok(accept) = Accept::parse(request) else {
            return Self::Json;
        };
        let acceptable = Accept(
            accept
                .0
                .into_iter()
                .filter(|item| item.quality > Quality::ZERO)
                .collect(),
        );
        acceptable
            .ranked()
            .iter()
            .find_map(|mime| Self::from_essence(mime.essence_str()))
            .unwrap_or(Self::Json)
    }

    fn from_essence(essence: &str) -> Option<Self> {
        match essence {
            JSON_MEDIA_TYPE | "application/*" | "*/*" => Some(Self::Json),
            ODATA_VENDOR_MEDIA_TYPE => Some(Self::VendorJson),
            YAML_MEDIA_TYPE => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Content type written for this format.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => JSON_MEDIA_TYPE,
            Self::VendorJson => ODATA_VENDOR_MEDIA_TYPE,
            Self::Yaml => YAML_MEDIA_TYPE,
        }
    }

    /// Build a 200 response carrying `body` in this format.
    ///
    /// # Errors
    ///
    /// Returns an internal error when `body` cannot be serialised.
    pub fn ok<T: Serialize>(self, body: &T) -> Result<HttpResponse, Error> {
        self.respond(StatusCode::OK, body)
    }

    /// Build a response with `status` carrying `body` in this format.
    ///
    /// # Errors
    ///
    /// Returns an internal error when `body` cannot be serialised.
    pub fn respond<T: Serialize>(
        self,
        status: StatusCode,
        body: &T,
    ) -> Result<HttpResponse, Error> {
        let mut builder = HttpResponse::build(status);
        builder.content_type(self.content_type());
        match self {
            Self::Json | Self::VendorJson => {
                let payload = serde_json::to_vec(body)
                    .map_err(|err| Error::internal(format!("failed to encode response: {err}")))?;
                Ok(builder.body(payload))
            }
            Self::Yaml => {
                debug!("yaml formatter writes no body");
                Ok(builder.finish())
            }
        }
    }
}
