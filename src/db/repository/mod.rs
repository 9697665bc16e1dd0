//! Repository Module
//!
//! CRUD operations over the SQLite tables. Each repository is a set of free
//! functions taking a `&SqlitePool`; field invariants (positive price,
//! non-empty name, positive quantity) are enforced here so they hold for
//! every caller, not just the HTTP surface.

pub mod menu_item;
pub mod order;
pub mod stats;
pub mod user;

use thiserror::Error;

/// Repository error taxonomy
///
/// Uniqueness and referential-integrity failures come out of SQLite
/// constraints and are classified in [`From<sqlx::Error>`]; everything else
/// is raised directly by the repositories.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Not available: {0}")]
    Unavailable(String),

    #[error("Referential conflict: {0}")]
    ReferentialConflict(String),

    #[error("Invalid status: {0}")]
    InvalidTransition(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation => {
                    // SQLite reports "UNIQUE constraint failed: <table>.<column>"
                    let msg = db_err.message();
                    if msg.contains("users.username") {
                        return RepoError::DuplicateUsername;
                    }
                    if msg.contains("users.email") {
                        return RepoError::DuplicateEmail;
                    }
                }
                sqlx::error::ErrorKind::ForeignKeyViolation => {
                    return RepoError::ReferentialConflict(
                        "Record is still referenced by existing orders".to_string(),
                    );
                }
                _ => {}
            }
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
