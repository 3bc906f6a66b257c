//! Order API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/pedido/adicionar | POST | 点单 (无开台则自动开台) |
//! | /api/pedido/aberto/{mesa_id} | GET | 当前桌台的未结订单 |
//! | /api/item/remover | POST | 删除一行 |
//! | /api/pedido/finalizar | POST | 结账并释放桌台 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/pedido/adicionar", post(handler::add_item))
        .route("/api/pedido/aberto/{mesa_id}", get(handler::get_open_order))
        .route("/api/item/remover", post(handler::remove_item))
        .route("/api/pedido/finalizar", post(handler::finalize))
}
