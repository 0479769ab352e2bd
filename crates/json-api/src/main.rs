//! Storefront JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use storefront_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod carts;
mod categories;
mod config;
mod cors;
mod extensions;
mod healthcheck;
mod messages;
mod observability;
mod orders;
mod products;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

#[expect(
    clippy::print_stderr,
    reason = "logging is not initialised when configuration or tracing setup fails"
)]
#[expect(clippy::exit, reason = "startup failures end the process")]
fn fail_before_logging(message: &str) -> ! {
    eprintln!("{message}");

    process::exit(1)
}

#[expect(clippy::exit, reason = "startup failures end the process")]
fn fail(message: &str) -> ! {
    error!("{message}");

    process::exit(1)
}

/// Storefront JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load()
        .unwrap_or_else(|e| fail_before_logging(&format!("Configuration error: {e}")));

    if let Err(e) = observability::init(&config) {
        fail_before_logging(&format!("Observability error: {e}"));
    }

    let cors = cors::handler(&config.cors)
        .unwrap_or_else(|e| fail(&format!("invalid CORS origin: {e}")));

    let addr = config.socket_addr();

    info!(%addr, "starting storefront server");

    let listener = TcpListener::new(addr).bind().await;

    let app = AppContext::from_database_url(
        &config.database.database_url,
        config.database.database_max_connections,
        config.database.run_migrations,
    )
    .await
    .unwrap_or_else(|e| fail(&format!("failed to initialize app context: {e}")));

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .hoop(observability::request_logging)
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(router::api_router());

    let doc = OpenApi::new("Storefront API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(Service::new(router).hoop(cors)).await;
}
