//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Table occupancy status (stored as the front end's Portuguese labels)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum TableStatus {
    #[default]
    #[serde(rename = "livre")]
    #[cfg_attr(feature = "db", sqlx(rename = "livre"))]
    Free,
    #[serde(rename = "ocupado")]
    #[cfg_attr(feature = "db", sqlx(rename = "ocupado"))]
    Occupied,
    /// Allowed by the schema, never entered by the order lifecycle
    #[serde(rename = "reservado")]
    #[cfg_attr(feature = "db", sqlx(rename = "reservado"))]
    Reserved,
}

impl TableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "livre",
            Self::Occupied => "ocupado",
            Self::Reserved => "reservado",
        }
    }
}

/// Dining table entity (mesa)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    #[serde(rename = "numero")]
    pub number: i32,
    pub status: TableStatus,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    #[serde(rename = "numero")]
    pub number: i32,
    pub status: Option<TableStatus>,
}
