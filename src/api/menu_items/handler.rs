//! Menu Catalog API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{CATEGORIES, MenuItem, MenuItemInput};
use crate::db::repository::{RepoError, menu_item as item_repo};
use crate::utils::{AppError, AppResponse, AppResult, ok_with_message};

/// GET /api/menu-items - all items ordered by (category, name)
///
/// A storage failure on this read path degrades to an empty list with a
/// logged warning instead of failing the page.
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = match item_repo::find_all(state.pool()).await {
        Ok(items) => items,
        Err(RepoError::Database(msg)) => {
            tracing::warn!(error = %msg, "Menu list degraded to empty result");
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };
    Ok(Json(items))
}

/// GET /api/menu-items/categories - starter category set for form dropdowns
pub async fn categories() -> Json<Vec<&'static str>> {
    Json(CATEGORIES.to_vec())
}

/// GET /api/menu-items/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    let item = item_repo::find_by_id(state.pool(), id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Menu item {id} not found")))?;
    Ok(Json(item))
}

/// POST /api/menu-items
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemInput>,
) -> AppResult<Json<MenuItem>> {
    let item = item_repo::create(state.pool(), payload)
        .await
        .map_err(AppError::from)?;
    tracing::info!(item_id = item.id, name = %item.name, "Menu item created");
    Ok(Json(item))
}

/// PUT /api/menu-items/:id - full overwrite
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuItemInput>,
) -> AppResult<Json<MenuItem>> {
    let item = item_repo::update(state.pool(), id, payload)
        .await
        .map_err(AppError::from)?;
    tracing::info!(item_id = id, "Menu item updated");
    Ok(Json(item))
}

/// DELETE /api/menu-items/:id
///
/// Blocked with a referential conflict while any order still references the
/// item.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AppResponse<bool>>> {
    item_repo::delete(state.pool(), id)
        .await
        .map_err(AppError::from)?;
    tracing::info!(item_id = id, "Menu item deleted");
    Ok(ok_with_message(true, "Menu item deleted successfully"))
}
