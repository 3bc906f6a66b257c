//! Comanda (order) and line item models

use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "aberto")]
    #[cfg_attr(feature = "db", sqlx(rename = "aberto"))]
    Open,
    #[serde(rename = "fechado")]
    #[cfg_attr(feature = "db", sqlx(rename = "fechado"))]
    Closed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "aberto",
            Self::Closed => "fechado",
        }
    }
}

/// Comanda entity
///
/// `total` is a cache refreshed whenever the open order is read; the line
/// items are the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Comanda {
    pub id: i64,
    pub status: OrderStatus,
    /// Unix millis
    pub created_at: i64,
    pub total: f64,
    pub table_id: i64,
    pub employee_id: i64,
}

impl Comanda {
    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Open
    }
}

/// Comanda line item (item do pedido)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ComandaItem {
    pub id: i64,
    pub quantity: i32,
    pub comanda_id: i64,
    pub product_id: i64,
}
