//! Shared test fixtures

use comanda_server::{Config, ServerState};
use tempfile::TempDir;

/// Fresh server state backed by a temp-dir SQLite file.
///
/// The returned `TempDir` must stay alive for the duration of the test.
pub async fn test_state() -> (TempDir, ServerState) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let config = Config {
        work_dir: dir.path().to_str().unwrap().to_string(),
        http_port: 0,
        database_path: db_path.to_str().unwrap().to_string(),
        session_ttl_minutes: 60,
        environment: "test".to_string(),
        log_level: "warn".to_string(),
    };
    let state = ServerState::initialize(&config)
        .await
        .expect("failed to initialize test state");
    (dir, state)
}
