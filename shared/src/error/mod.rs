//! Unified error system
//!
//! - [`ErrorCode`]: standardized numeric error codes
//! - [`ErrorCategory`]: classification of codes by range
//! - [`AppError`]: error carrying a code, a message and optional details
//! - [`ApiResponse`]: the JSON body every failed request answers with
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Product errors
//! - 7xxx: Table errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ApiResponse, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::TableNotFound, "Mesa 9 não encontrada")
//!     .with_detail("mesa_id", 9);
//!
//! let body = ApiResponse::<()>::error(&err);
//! assert!(!body.success);
//! assert_eq!(body.code, Some(7001));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
