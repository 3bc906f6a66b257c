//! Request payloads for the order API
//!
//! Every id is optional on the wire so a missing field can be reported as a
//! validation error instead of a JSON rejection.

use serde::{Deserialize, Serialize};

/// `POST /api/pedido/adicionar`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddItemRequest {
    #[serde(rename = "mesa_id")]
    pub table_id: Option<i64>,
    #[serde(rename = "produto_id")]
    pub product_id: Option<i64>,
    /// Staff member attributed with a newly opened order
    #[serde(rename = "garcom_id")]
    pub employee_id: Option<i64>,
}

/// `POST /api/item/remover`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveItemRequest {
    pub item_id: Option<i64>,
}

/// `POST /api/pedido/finalizar`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinalizeOrderRequest {
    #[serde(rename = "pedido_id")]
    pub order_id: Option<i64>,
}
