//! Order Ledger API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{OrderCreate, OrderWithItem};
use crate::db::repository::{RepoError, order as order_repo};
use crate::utils::{AppError, AppResponse, AppResult, ok_with_message};

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

/// GET /api/orders - all orders joined with current item name/price,
/// newest first
///
/// Degrades to an empty list on a storage read failure.
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderWithItem>>> {
    let orders = match order_repo::find_all(state.pool()).await {
        Ok(orders) => orders,
        Err(RepoError::Database(msg)) => {
            tracing::warn!(error = %msg, "Order list degraded to empty result");
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };
    Ok(Json(orders))
}

/// GET /api/orders/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderWithItem>> {
    let order = order_repo::find_by_id(state.pool(), id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
    Ok(Json(order))
}

/// POST /api/orders - place an order, snapshotting the catalog price
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<OrderWithItem>> {
    let order = order_repo::create(state.pool(), payload)
        .await
        .map_err(AppError::from)?;
    tracing::info!(
        order_id = order.id,
        table = order.table_number,
        item_id = order.item_id,
        total = order.total_price,
        "Order created"
    );
    Ok(Json(order))
}

/// PUT /api/orders/:id/status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<Json<AppResponse<bool>>> {
    order_repo::update_status(state.pool(), id, &payload.status)
        .await
        .map_err(AppError::from)?;
    tracing::info!(order_id = id, status = %payload.status, "Order status updated");
    Ok(ok_with_message(true, "Order status updated successfully"))
}

/// DELETE /api/orders/:id - unconditional hard delete
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AppResponse<bool>>> {
    order_repo::delete(state.pool(), id)
        .await
        .map_err(AppError::from)?;
    tracing::info!(order_id = id, "Order deleted");
    Ok(ok_with_message(true, "Order deleted successfully"))
}
