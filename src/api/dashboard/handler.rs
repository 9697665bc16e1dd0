//! Dashboard API Handlers
//!
//! Read-only projection over catalog + ledger state, computed on demand.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::OrderWithItem;
use crate::db::repository::stats::{self, DashboardStats};
use crate::db::repository::{RepoError, order as order_repo};
use crate::utils::{AppResult, time::today_bounds_millis};

/// Recent-orders panel size
const RECENT_ORDERS_LIMIT: i64 = 5;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_orders: Vec<OrderWithItem>,
}

/// GET /api/dashboard - today's counters plus the most recent orders
///
/// Both reads degrade (zeroed counters / empty list) on storage failure so
/// the dashboard always renders.
pub async fn overview(State(state): State<ServerState>) -> AppResult<Json<DashboardResponse>> {
    let (day_start, day_end) = today_bounds_millis();

    let stats = match stats::dashboard_stats(state.pool(), day_start, day_end).await {
        Ok(stats) => stats,
        Err(RepoError::Database(msg)) => {
            tracing::warn!(error = %msg, "Dashboard stats degraded to zeros");
            DashboardStats {
                active_items: 0,
                pending_orders: 0,
                today_orders: 0,
                today_revenue: 0.0,
            }
        }
        Err(e) => return Err(e.into()),
    };

    let recent_orders = match order_repo::find_recent(state.pool(), RECENT_ORDERS_LIMIT).await {
        Ok(orders) => orders,
        Err(RepoError::Database(msg)) => {
            tracing::warn!(error = %msg, "Recent orders degraded to empty result");
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(DashboardResponse {
        stats,
        recent_orders,
    }))
}
