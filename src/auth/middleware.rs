//! Access policy gate
//!
//! Axum middleware that resolves the bearer token to a server-side session
//! before any catalog/ledger handler runs. Failure rejects the whole request
//! up front, so a wrapped operation never executes partially.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::Role;
use crate::utils::AppError;

/// Authenticated caller context, injected into request extensions.
///
/// Handlers receive this explicitly (`Extension<CurrentUser>`) rather than
/// consulting any ambient session global. `role` is carried for display and
/// future policy; no core operation is role-gated today.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

/// Paths reachable without a session
fn is_public_api_route(path: &str) -> bool {
    matches!(
        path,
        "/api/auth/login" | "/api/auth/register" | "/api/auth/logout" | "/api/health"
    )
}

/// Authentication middleware — requires a live session.
///
/// Reads `Authorization: Bearer <token>`, resolves it in the session store
/// and injects [`CurrentUser`] into the request extensions.
///
/// # Skipped paths
///
/// - `OPTIONS *` (CORS preflight)
/// - non-`/api/` paths (fall through to 404)
/// - the public auth routes and the health probe
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") || is_public_api_route(path) {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer);

    let token = match token {
        Some(t) => t,
        None => {
            tracing::warn!(uri = %req.uri(), "Request without credentials rejected");
            return Err(AppError::Unauthorized);
        }
    };

    match state.sessions.get(token) {
        Some(session) => {
            req.extensions_mut().insert(CurrentUser {
                id: session.user_id,
                username: session.username,
                role: session.role,
            });
            Ok(next.run(req).await)
        }
        None => {
            tracing::warn!(uri = %req.uri(), "Invalid or expired session token");
            Err(AppError::Unauthorized)
        }
    }
}

/// Strip the `Bearer ` prefix from an Authorization header value
pub fn extract_bearer(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_extraction() {
        assert_eq!(extract_bearer("Bearer abc123"), Some("abc123"));
        assert_eq!(extract_bearer("Basic abc123"), None);
        assert_eq!(extract_bearer("abc123"), None);
    }

    #[test]
    fn public_routes() {
        assert!(is_public_api_route("/api/auth/login"));
        assert!(is_public_api_route("/api/health"));
        assert!(!is_public_api_route("/api/menu-items"));
        assert!(!is_public_api_route("/api/orders"));
    }
}
