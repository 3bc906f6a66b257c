//! Data models
//!
//! Shared between pos-server and the front end (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod comanda;
pub mod dining_table;
pub mod employee;
pub mod product;

// Re-exports
pub use comanda::*;
pub use dining_table::*;
pub use employee::*;
pub use product::*;
