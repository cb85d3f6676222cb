//! Bookshelf entry-point: seeds the book store, provisions the message bus,
//! and serves the OData endpoints.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bookshelf::domain::BookCatalogueService;
use bookshelf::domain::ports::{MESSAGES_QUEUE, MessageBus};
use bookshelf::inbound::http::health::HealthState;
use bookshelf::outbound::messaging::InMemoryMessageBus;
use bookshelf::outbound::persistence::InMemoryBookRepository;
use bookshelf::seeding::{load_catalogue, seed_books_on_startup};
use bookshelf::settings::BookshelfSettings;
#[cfg(feature = "metrics")]
use server::make_metrics;
use server::{ServerConfig, ServerPorts, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = BookshelfSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr()?;

    let catalogue =
        load_catalogue(settings.seed_path.as_deref()).map_err(std::io::Error::other)?;
    let catalogue_service = Arc::new(BookCatalogueService::new(
        Arc::new(InMemoryBookRepository::new()),
        catalogue,
    ));
    seed_books_on_startup(&catalogue_service)
        .await
        .map_err(std::io::Error::other)?;

    let bus = Arc::new(InMemoryMessageBus::new(MESSAGES_QUEUE));
    info!(queue = bus.queue_name(), "message bus provisioned");

    let config = ServerConfig::new(bind_addr).with_not_found_policy(settings.not_found_policy());
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(make_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state,
        config,
        ServerPorts {
            books: catalogue_service,
            bus,
        },
    )?;
    info!(%bind_addr, "bookshelf listening");
    server.await
}
