//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`auth`] - registration, login, logout, session lookup
//! - [`menu_items`] - menu catalog CRUD
//! - [`orders`] - order ledger
//! - [`dashboard`] - aggregate statistics

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod menu_items;
pub mod orders;

use axum::{Router, middleware};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::middleware::require_auth;
use crate::core::ServerState;

/// Assemble the full application router.
///
/// The auth gate wraps every `/api/*` route; public paths are skipped inside
/// the middleware itself.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(menu_items::router())
        .merge(orders::router())
        .merge(dashboard::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
