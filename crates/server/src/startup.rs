use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::{runtime, student::DocumentStudentRepository};

fn build_cors() -> CorsLayer {
    // the browser client is served from another origin
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    cfg.bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}: {e}", cfg.bind_addr())))
}

/// Open the configured student collection.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    if cfg.storage.in_memory {
        info!("student store: in-memory");
        return Ok(ServerState::in_memory());
    }
    let data_file = cfg.storage.data_file.as_str();
    runtime::ensure_data_dir(data_file)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    let repo = DocumentStudentRepository::open(data_file)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    info!(%data_file, "student store: json file");
    Ok(ServerState::new(repo))
}

/// Router with the default CORS policy.
pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting student api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
