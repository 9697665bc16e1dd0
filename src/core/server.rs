//! HTTP server bootstrap

use std::time::Duration;

use crate::api;
use crate::core::{Config, ServerState};
use crate::utils::AppError;

/// Interval between session-sweeper runs
const SESSION_SWEEP_INTERVAL_SECS: u64 = 60;

/// HTTP server — owns the config and shared state
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Bind and serve until ctrl-c.
    ///
    /// Also spawns the background sweeper that evicts expired sessions.
    pub async fn run(self) -> Result<(), AppError> {
        let sessions = self.state.sessions.clone();
        tokio::spawn(async move {
            let mut ticker =
                tokio::time::interval(Duration::from_secs(SESSION_SWEEP_INTERVAL_SECS));
            loop {
                ticker.tick().await;
                let purged = sessions.purge_expired();
                if purged > 0 {
                    tracing::debug!(purged, "Expired sessions purged");
                }
            }
        });

        let app = api::router(self.state);

        let addr = format!("0.0.0.0:{}", self.config.http_port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        tracing::info!(addr = %addr, environment = %self.config.environment, "HTTP server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutdown signal received");
}
