//! Record Directory HTTP host
//!
//! This crate exposes every Country and Person directory operation as a
//! REST endpoint and translates directory errors into HTTP responses.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::info;

use directory_service_lib::Directories;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = config.service.bind_address().parse()?;
    let service_name = config.service.service_name.clone();

    // Create app state backed by fresh in-memory directories
    let state = AppState::new(Directories::in_memory(), config);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    info!(service = %service_name, "Listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
