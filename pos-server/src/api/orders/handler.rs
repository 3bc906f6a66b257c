//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::extractor::AppJson;
use crate::core::ServerState;
use crate::utils::AppResult;
use shared::request::{AddItemRequest, FinalizeOrderRequest, RemoveItemRequest};
use shared::response::{ActionResponse, OpenOrderSnapshot};

/// POST /api/pedido/adicionar
pub async fn add_item(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<AddItemRequest>,
) -> AppResult<Json<ActionResponse>> {
    state.orders.add_item(payload).await?;
    Ok(Json(ActionResponse::ok("Item adicionado com sucesso")))
}

/// GET /api/pedido/aberto/{mesa_id}
pub async fn get_open_order(
    State(state): State<ServerState>,
    Path(table_id): Path<i64>,
) -> AppResult<Json<OpenOrderSnapshot>> {
    let snapshot = state.orders.get_open_order(table_id).await?;
    Ok(Json(snapshot))
}

/// POST /api/item/remover
pub async fn remove_item(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<RemoveItemRequest>,
) -> AppResult<Json<ActionResponse>> {
    state.orders.remove_item(payload).await?;
    Ok(Json(ActionResponse::ok("Item removido com sucesso!")))
}

/// POST /api/pedido/finalizar
pub async fn finalize(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<FinalizeOrderRequest>,
) -> AppResult<Json<ActionResponse>> {
    state.orders.finalize(payload).await?;
    Ok(Json(ActionResponse::ok("Pedido finalizado com sucesso!")))
}
