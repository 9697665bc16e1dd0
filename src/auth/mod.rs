//! Authentication
//!
//! - [`password`] - argon2 hashing and verification
//! - [`session`] - opaque-token server-side session store
//! - [`middleware`] - the access policy gate over `/api/*`

pub mod middleware;
pub mod password;
pub mod session;

pub use middleware::CurrentUser;
pub use session::{Session, SessionStore};
