//! 工具模块
//!
//! - [`AppError`] / [`ApiResponse`] (from `shared::error`)
//! - [`logger`] - tracing 初始化

pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
