//! Shared types for the comanda backend
//!
//! Domain models, request/response payloads, the unified error system and
//! small utilities used by `pos-server` and its tests.

pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
