//! Catalog API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::product;
use crate::utils::AppResult;
use shared::models::Product;

/// GET /api/cardapio - 获取全部商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let products = product::find_all(&state.db.pool).await?;
    Ok(Json(products))
}
