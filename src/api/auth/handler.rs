//! Authentication Handlers
//!
//! Registration, login, logout and current-session lookup.

use std::time::Duration;

use axum::{
    Extension, Json,
    extract::State,
    http::{HeaderMap, header},
};
use serde::{Deserialize, Serialize};

use crate::auth::middleware::extract_bearer;
use crate::auth::{CurrentUser, password};
use crate::core::ServerState;
use crate::db::models::{Role, User, UserCreate};
use crate::db::repository::user as user_repo;
use crate::utils::{
    AppError, AppResponse, AppResult, ok_with_message,
    validation::{validate_email, validate_password, validate_username},
};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: i64,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: i64,
    pub user: UserInfo,
}

/// POST /api/auth/register - create a staff account
///
/// Uniqueness is enforced by the storage constraints, so two concurrent
/// registrations of the same username produce exactly one row.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<AppResponse<UserInfo>>> {
    let username = req.username.trim().to_string();
    let email = req.email.trim().to_string();

    validate_username(&username)?;
    validate_email(&email)?;
    validate_password(&req.password)?;

    let password_hash = password::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let user = user_repo::create(
        state.pool(),
        UserCreate {
            username,
            email,
            password_hash,
        },
    )
    .await
    .map_err(AppError::from)?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");
    Ok(ok_with_message(user.into(), "Account created successfully"))
}

/// POST /api/auth/login - authenticate and open a session
///
/// Unknown username and wrong password both return the same
/// invalid-credentials error, after the same fixed delay.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = user_repo::find_by_username(state.pool(), &req.username)
        .await
        .map_err(AppError::from)?;

    // Fixed delay before the result is examined
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = match user {
        Some(u) => {
            let password_valid = password::verify_password(&req.password, &u.password_hash)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
            if !password_valid {
                tracing::warn!(username = %req.username, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }
            u
        }
        None => {
            tracing::warn!(username = %req.username, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let session = state.sessions.create(user.id, &user.username, user.role)?;

    tracing::info!(user_id = user.id, username = %user.username, role = %user.role, "User logged in");

    Ok(Json(LoginResponse {
        token: session.token,
        expires_at: session.expires_at,
        user: user.into(),
    }))
}

/// POST /api/auth/logout - destroy the session
///
/// Idempotent and public: a missing or already-dead token still logs out
/// cleanly.
pub async fn logout(
    State(state): State<ServerState>,
    headers: HeaderMap,
) -> Json<AppResponse<()>> {
    if let Some(token) = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer)
    {
        state.sessions.remove(token);
    }
    ok_with_message((), "Logged out successfully")
}

/// GET /api/auth/me - identity bound to the presented token
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<CurrentUser> {
    Json(user)
}
