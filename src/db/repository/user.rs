//! User Repository

use super::RepoResult;
use crate::db::models::User;
use crate::db::models::user::UserCreate;
use crate::utils::{id::snowflake_id, time::now_millis};
use sqlx::SqlitePool;

const USER_SELECT: &str =
    "SELECT id, username, email, password_hash, role, created_at FROM users";

/// Insert a new user with role `staff`.
///
/// Duplicate checking is the INSERT itself: the UNIQUE constraints on
/// username/email reject concurrent duplicates atomically, and the violation
/// is classified into `DuplicateUsername` / `DuplicateEmail`.
pub async fn create(pool: &SqlitePool, data: UserCreate) -> RepoResult<User> {
    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO users (id, username, email, password_hash, role, created_at) VALUES (?1, ?2, ?3, ?4, 'staff', ?5)",
    )
    .bind(id)
    .bind(&data.username)
    .bind(&data.email)
    .bind(&data.password_hash)
    .bind(now)
    .execute(pool)
    .await?;

    let sql = format!("{USER_SELECT} WHERE id = ?");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE username = ?");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}
