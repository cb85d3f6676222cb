//! HTTP inbound adapter exposing the OData endpoints and health checks.

use actix_web::web;

pub mod books;
pub mod dto;
pub mod error;
pub mod health;
pub mod media;
pub mod odata;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use crate::domain::ApiResult;

/// Register the OData scope: service root, `$metadata`, and book routes.
///
/// Handlers expect [`state::HttpState`] in app data.
pub fn configure_odata(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(odata::ODATA_ROOT)
            .service(odata::service_document)
            .service(odata::metadata)
            .service(books::list_books)
            .service(books::get_book)
            .service(books::get_book_by_segment),
    );
}
