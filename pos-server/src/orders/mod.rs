//! Order Service
//!
//! Orchestrates the catalog, the table registry and the order ledger:
//!
//! - **service**: `OrderService` with add / get open / remove / finalize
//! - **locks**: per-table async mutexes
//! - **money**: decimal totals
//!
//! # Table lifecycle
//!
//! ```text
//! livre ──(add item)──▶ ocupado + comanda aberta ──(finalize)──▶ livre
//! ```

pub mod error;
pub mod locks;
pub mod money;
pub mod service;

pub use error::{OrderError, OrderResult};
pub use locks::TableLocks;
pub use service::{AddItemOutcome, FinalizeOutcome, OrderService, RemoveItemOutcome};
