//! Application struct that encapsulates server assembly and serving logic.

use ipecho_core::access_log::TracingSink;
use ipecho_server::{AppState, build_router};
use std::net::SocketAddr;
use std::sync::Arc;

/// Fixed listen address. The service deliberately exposes no configuration
/// surface for it.
const LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Application {
    app_router: axum::Router,
}

impl Application {
    /// Build the router with the default tracing-backed access-log sink.
    pub fn build() -> Self {
        let state = AppState {
            sink: Arc::new(TracingSink),
        };
        Self {
            app_router: build_router(state),
        }
    }

    /// Bind the fixed address and serve until ctrl-c.
    ///
    /// A bind failure is the one fatal startup error and propagates out.
    pub async fn serve(self) -> anyhow::Result<()> {
        tracing::info!("Starting HTTP server on {LISTEN_ADDR}");
        let listener = tokio::net::TcpListener::bind(LISTEN_ADDR).await?;

        axum::serve(
            listener,
            self.app_router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        tracing::info!("Server shut down.");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
