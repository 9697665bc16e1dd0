//! Order Repository

use super::{RepoError, RepoResult};
use crate::db::models::{OrderCreate, OrderStatus, OrderWithItem};
use crate::utils::{id::snowflake_id, time::now_millis};
use sqlx::SqlitePool;

const ORDER_WITH_ITEM_SELECT: &str = "SELECT o.id, o.table_number, o.item_id, m.name as item_name, m.price as item_price, o.quantity, o.total_price, o.status, o.order_date FROM orders o JOIN menu_items m ON o.item_id = m.id";

/// Status transition policy.
///
/// The current policy allows any status to move to any other, including
/// re-opening a cancelled order. Call sites go through this single function
/// so a forward-only graph can be swapped in here without touching them.
pub fn validate_transition(_current: OrderStatus, _next: OrderStatus) -> RepoResult<()> {
    Ok(())
}

/// Place an order against the catalog.
///
/// The item lookup and the insert run in one transaction so the snapshot is
/// taken against a consistent view: `total_price = price-at-this-moment x
/// quantity`, persisted as a value and never recomputed later. Initial
/// status is `pending`.
pub async fn create(pool: &SqlitePool, data: OrderCreate) -> RepoResult<OrderWithItem> {
    if data.table_number <= 0 {
        return Err(RepoError::Validation(
            "Table number must be greater than 0".to_string(),
        ));
    }
    if data.quantity <= 0 {
        return Err(RepoError::Validation(
            "Quantity must be at least 1".to_string(),
        ));
    }

    let mut tx = pool.begin().await.map_err(RepoError::from)?;

    let item: Option<(f64, bool)> =
        sqlx::query_as("SELECT price, available FROM menu_items WHERE id = ?")
            .bind(data.item_id)
            .fetch_optional(&mut *tx)
            .await?;

    let (price, available) = item.ok_or_else(|| {
        RepoError::NotFound(format!("Menu item {} not found", data.item_id))
    })?;
    if !available {
        return Err(RepoError::Unavailable(
            "Selected item is not available".to_string(),
        ));
    }

    let id = snowflake_id();
    let total_price = price * data.quantity as f64;
    let now = now_millis();

    sqlx::query(
        "INSERT INTO orders (id, table_number, item_id, quantity, total_price, status, order_date) VALUES (?1, ?2, ?3, ?4, ?5, 'pending', ?6)",
    )
    .bind(id)
    .bind(data.table_number)
    .bind(data.item_id)
    .bind(data.quantity)
    .bind(total_price)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await.map_err(RepoError::from)?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
}

/// All orders joined with the current item name/price, newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<OrderWithItem>> {
    let sql = format!("{ORDER_WITH_ITEM_SELECT} ORDER BY o.order_date DESC");
    let orders = sqlx::query_as::<_, OrderWithItem>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(orders)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<OrderWithItem>> {
    let sql = format!("{ORDER_WITH_ITEM_SELECT} WHERE o.id = ?");
    let order = sqlx::query_as::<_, OrderWithItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(order)
}

/// Most recent orders (dashboard panel)
pub async fn find_recent(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<OrderWithItem>> {
    let sql = format!("{ORDER_WITH_ITEM_SELECT} ORDER BY o.order_date DESC LIMIT ?");
    let orders = sqlx::query_as::<_, OrderWithItem>(&sql)
        .bind(limit)
        .fetch_all(pool)
        .await?;
    Ok(orders)
}

/// Set an order's status.
///
/// `new_status` must be one of the enumerated values
/// (`InvalidTransition` otherwise); the transition itself goes through
/// [`validate_transition`]. The status read and the write share one
/// transaction, so the value the policy sees cannot change underneath it.
pub async fn update_status(pool: &SqlitePool, id: i64, new_status: &str) -> RepoResult<()> {
    let status = OrderStatus::parse(new_status)
        .ok_or_else(|| RepoError::InvalidTransition(new_status.to_string()))?;

    let mut tx = pool.begin().await.map_err(RepoError::from)?;

    let current: Option<OrderStatus> =
        sqlx::query_scalar("SELECT status FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    let current = current.ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))?;

    validate_transition(current, status)?;

    sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await.map_err(RepoError::from)?;
    Ok(())
}

/// Unconditional hard delete
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }
    Ok(())
}
