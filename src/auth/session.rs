//! Server-side session store
//!
//! Sessions are ephemeral, held in-process and keyed by an opaque token the
//! client carries as a bearer credential. Logout (or expiry) destroys the
//! server-side record, so a token cannot outlive its session.

use dashmap::DashMap;
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};

use crate::db::models::Role;
use crate::utils::AppError;
use crate::utils::time::now_millis;

/// Session bound to `{user_id, username, role}` at login time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(skip_serializing)]
    pub token: String,
    pub user_id: i64,
    pub username: String,
    pub role: Role,
    pub expires_at: i64,
}

/// In-process session store (token -> session)
pub struct SessionStore {
    sessions: DashMap<String, Session>,
    ttl_minutes: i64,
    rng: SystemRandom,
}

impl SessionStore {
    pub fn new(ttl_minutes: i64) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl_minutes,
            rng: SystemRandom::new(),
        }
    }

    /// Create a session for a freshly authenticated user
    pub fn create(&self, user_id: i64, username: &str, role: Role) -> Result<Session, AppError> {
        let token = self.generate_token()?;
        let session = Session {
            token: token.clone(),
            user_id,
            username: username.to_string(),
            role,
            expires_at: now_millis() + self.ttl_minutes * 60_000,
        };
        self.sessions.insert(token, session.clone());
        Ok(session)
    }

    /// Resolve a token to its session.
    ///
    /// Expired entries count as absent and are removed on the way out.
    pub fn get(&self, token: &str) -> Option<Session> {
        let expired = match self.sessions.get(token) {
            Some(entry) => {
                if entry.expires_at > now_millis() {
                    return Some(entry.value().clone());
                }
                true
            }
            None => false,
        };
        if expired {
            self.sessions.remove(token);
        }
        None
    }

    /// Destroy a session. Idempotent: removing an unknown token is a no-op.
    pub fn remove(&self, token: &str) {
        self.sessions.remove(token);
    }

    /// Drop every expired session (background sweeper)
    pub fn purge_expired(&self) -> usize {
        let now = now_millis();
        let before = self.sessions.len();
        self.sessions.retain(|_, session| session.expires_at > now);
        before - self.sessions.len()
    }

    /// 256-bit random token, hex encoded
    fn generate_token(&self) -> Result<String, AppError> {
        let mut bytes = [0u8; 32];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| AppError::internal("Failed to generate session token"))?;
        Ok(hex::encode(bytes))
    }
}
