//! Menu Item Repository

use super::{RepoError, RepoResult};
use crate::db::models::{MenuItem, MenuItemInput};
use crate::utils::{id::snowflake_id, time::now_millis};
use sqlx::SqlitePool;

const ITEM_SELECT: &str =
    "SELECT id, name, description, price, category, available, created_at, updated_at FROM menu_items";

/// Field invariants: name non-empty, price positive and finite, category
/// non-empty. Enforced for both create and update.
fn validate(data: &MenuItemInput) -> RepoResult<()> {
    if data.name.trim().is_empty() {
        return Err(RepoError::Validation("Item name is required".to_string()));
    }
    if !data.price.is_finite() || data.price <= 0.0 {
        return Err(RepoError::Validation(
            "Price must be greater than 0".to_string(),
        ));
    }
    if data.category.trim().is_empty() {
        return Err(RepoError::Validation("Category is required".to_string()));
    }
    Ok(())
}

/// All menu items, ordered by (category, name) ascending
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let sql = format!("{ITEM_SELECT} ORDER BY category, name");
    let items = sqlx::query_as::<_, MenuItem>(&sql).fetch_all(pool).await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let sql = format!("{ITEM_SELECT} WHERE id = ?");
    let item = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

pub async fn create(pool: &SqlitePool, data: MenuItemInput) -> RepoResult<MenuItem> {
    validate(&data)?;
    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO menu_items (id, name, description, price, category, available, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price)
    .bind(&data.category)
    .bind(data.available)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
}

/// Full overwrite of all editable fields
pub async fn update(pool: &SqlitePool, id: i64, data: MenuItemInput) -> RepoResult<MenuItem> {
    validate(&data)?;
    let now = now_millis();
    let rows = sqlx::query(
        "UPDATE menu_items SET name = ?1, description = ?2, price = ?3, category = ?4, available = ?5, updated_at = ?6 WHERE id = ?7",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price)
    .bind(&data.category)
    .bind(data.available)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))
}

/// Hard delete.
///
/// Fails with `ReferentialConflict` (via the foreign key on orders.item_id)
/// while any order still references the item — deletion must never orphan
/// order history.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM menu_items WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {id} not found")));
    }
    Ok(())
}
