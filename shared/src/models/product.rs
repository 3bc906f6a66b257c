//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity (item do cardápio)
///
/// `category` is free text: `bebida`, `couvert`, `prato_principal`, `sobremesa`, ...
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    /// Price in currency unit
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: String,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: String,
}
