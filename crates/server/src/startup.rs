use std::{net::SocketAddr, path::PathBuf};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};
use service::{
    entries::{EntryService, FileEntryRepository},
    runtime,
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Host/port from the loaded config.
fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Prepare directories, open the entry document and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let entries_path = PathBuf::from(&cfg.storage.entries_path);
    runtime::ensure_env(&cfg.frontend.dir, &entries_path)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    // 日记存储（文件持久化 data/entries.json）
    let repo = FileEntryRepository::new(entries_path).await?;
    info!(path = %repo.path().display(), "entry store ready");

    let state = AppState { entries: EntryService::new(repo) };
    Ok(routes::build_router(state, build_cors(), &cfg.frontend.dir))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for Ctrl+C; shutdown signal disabled");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining in-flight requests");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    // Bind and serve
    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "journal server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
