//! Response payloads for the order API

use serde::{Deserialize, Serialize};

use crate::models::TableStatus;

/// Acknowledgement for state-changing calls
///
/// ```json
/// { "success": true, "message": "Item adicionado com sucesso" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// One resolved line of the open order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotItem {
    /// Line item id (used by `POST /api/item/remover`)
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "preco_unitario")]
    pub unit_price: f64,
}

/// Current state of a table's open order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenOrderSnapshot {
    /// `null` when the table has no open order
    #[serde(rename = "pedido_id")]
    pub order_id: Option<i64>,
    #[serde(rename = "itens")]
    pub items: Vec<SnapshotItem>,
    pub total: f64,
    #[serde(rename = "status_mesa")]
    pub table_status: TableStatus,
}

impl OpenOrderSnapshot {
    /// Snapshot for a table without an open order
    pub fn empty(table_status: TableStatus) -> Self {
        Self {
            order_id: None,
            items: Vec::new(),
            total: 0.0,
            table_status,
        }
    }
}
