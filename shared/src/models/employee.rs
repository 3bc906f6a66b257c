//! Employee Model (garçom)

use serde::{Deserialize, Serialize};

/// Staff member who opens orders
///
/// The phone number doubles as the login name. The hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "senha")]
    pub password: String,
}
