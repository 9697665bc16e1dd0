//! Dashboard Statistics
//!
//! Read-only projection over the catalog and ledger, computed on demand.

use super::RepoResult;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Dashboard aggregate counters
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DashboardStats {
    /// Menu items currently flagged available
    pub active_items: i64,
    /// Orders still in `pending`
    pub pending_orders: i64,
    /// Orders placed today
    pub today_orders: i64,
    /// Sum of snapshot totals for today's orders
    pub today_revenue: f64,
}

/// Compute the dashboard counters for one day window (`start <= order_date < end`).
pub async fn dashboard_stats(
    pool: &SqlitePool,
    day_start: i64,
    day_end: i64,
) -> RepoResult<DashboardStats> {
    let stats = sqlx::query_as::<_, DashboardStats>(
        "SELECT \
            (SELECT COUNT(*) FROM menu_items WHERE available = 1) as active_items, \
            (SELECT COUNT(*) FROM orders WHERE status = 'pending') as pending_orders, \
            (SELECT COUNT(*) FROM orders WHERE order_date >= ?1 AND order_date < ?2) as today_orders, \
            (SELECT COALESCE(SUM(total_price), 0.0) FROM orders WHERE order_date >= ?1 AND order_date < ?2) as today_revenue",
    )
    .bind(day_start)
    .bind(day_end)
    .fetch_one(pool)
    .await?;
    Ok(stats)
}
