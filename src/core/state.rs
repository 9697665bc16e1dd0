//! Server state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::SessionStore;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Server state — shared references to every service.
///
/// Cheap to clone; handed to each handler by axum.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | immutable configuration |
/// | db | SQLite pool wrapper |
/// | sessions | in-process session store |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    pub sessions: Arc<SessionStore>,
}

impl ServerState {
    /// Open the database, apply migrations and build the session store
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db = DbService::new(&config.database_path).await?;
        let sessions = Arc::new(SessionStore::new(config.session_ttl_minutes));

        Ok(Self {
            config: Arc::new(config.clone()),
            db,
            sessions,
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
