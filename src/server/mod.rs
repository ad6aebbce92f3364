use std::sync::Arc;

use crate::config::ServerConfig;
use crate::data::dog::DogRegistry;
use crate::data::post::PostLog;

pub mod api;
pub mod error;
pub mod routes;

/// Shared handle to the in-memory stores. Cloning is cheap; every clone sees
/// the same registry and post log.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub dogs: Arc<DogRegistry>,
    pub posts: Arc<PostLog>,
}

impl AppState {
    /// Fresh state holding the seeded dogs and posts.
    pub fn seeded() -> Self {
        Self::default()
    }
}

pub async fn run_server(config: &ServerConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "pets server listening");

    axum::serve(listener, routes::router(AppState::seeded()))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
