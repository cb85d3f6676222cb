//! Test helpers for inbound HTTP components.

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};

use super::configure_odata;
use super::state::HttpState;

/// Initialise an in-process app serving the OData routes over `state`.
pub async fn init_odata_app(
    state: HttpState,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_odata),
    )
    .await
}
