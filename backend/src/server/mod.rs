//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::ServerConfig;
#[cfg(feature = "metrics")]
pub(crate) use metrics::make_metrics;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use bookshelf::Trace;
use bookshelf::doc::ApiDoc;
use bookshelf::domain::ports::{BooksQuery, MessageBus};
use bookshelf::inbound::http::configure_odata;
use bookshelf::inbound::http::health::{HealthState, live, ready};
use bookshelf::inbound::http::state::HttpState;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Route of the JSON document read by Swagger UI.
const OPENAPI_JSON_ROUTE: &str = "/api-docs/openapi.json";
/// Route of the JSON document published beside ReDoc.
const REDOC_JSON_ROUTE: &str = "/redoc/v1/swagger.json";

/// Driven adapters the HTTP layer is wired against.
pub struct ServerPorts {
    /// Catalogue reads behind the seeding barrier.
    pub books: Arc<dyn BooksQuery>,
    /// Provisioned message bus.
    pub bus: Arc<dyn MessageBus>,
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    bus: web::Data<dyn MessageBus>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        bus,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(bus)
        .wrap(Trace)
        .configure(configure_odata)
        .service(ready)
        .service(live)
        .route("/api-docs/openapi.yaml", web::get().to(openapi_yaml))
        .route(REDOC_JSON_ROUTE, web::get().to(openapi_json))
        .service(SwaggerUi::new("/docs/{_:.*}").url(OPENAPI_JSON_ROUTE, ApiDoc::openapi()))
        .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
}

async fn openapi_json() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(ApiDoc::openapi())
}

async fn openapi_yaml() -> actix_web::Result<actix_web::HttpResponse> {
    let yaml = ApiDoc::openapi()
        .to_yaml()
        .map_err(actix_web::error::ErrorInternalServerError)?;
    Ok(actix_web::HttpResponse::Ok()
        .content_type("application/yaml")
        .body(yaml))
}

/// Construct an Actix HTTP server using the provided health state, ports and
/// configuration.
///
/// Readiness flips once the listener is bound, so callers seed the store
/// before calling this.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
    ports: ServerPorts,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        not_found,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;
    let ServerPorts { books, bus } = ports;

    let http_state = web::Data::new(HttpState::new(books).with_not_found_policy(not_found));
    let bus: web::Data<dyn MessageBus> = web::Data::from(bus);

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            bus: bus.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
