//! Checkout JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    cors::{Any, Cors},
    http::Method,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use checkout_app::context::AppContext;

use crate::{config::ServerConfig, observability::Observability, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod checkouts;
mod config;
mod extensions;
mod healthcheck;
mod observability;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Checkout JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    let observability = Observability::init(&config).unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability error: {e}");
        }

        process::exit(1);
    });

    let settings = match config.checkout.settings() {
        Ok(settings) => settings,
        Err(settings_error) => {
            error!("invalid checkout settings: {settings_error}");

            process::exit(1);
        }
    };

    info!(
        environment = settings.environment.name(),
        media_base_url = %settings.media_base_url,
        request_timeout_ms = settings.request_timeout.as_millis(),
        "checkout settings loaded"
    );

    let app = match AppContext::from_database_url(&config.database.database_url, settings).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(Router::with_path("checkout/{offer}").get(checkouts::show::handler));

    let doc = OpenApi::new("Checkout API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let cors = Cors::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .into_handler();

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(Service::new(router).hoop(cors)).await;

    observability.shutdown();
}
