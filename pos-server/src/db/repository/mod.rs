//! Repository Module
//!
//! Free functions over SQLite. Each function issues one statement and takes
//! any [`SqliteExecutor`](sqlx::SqliteExecutor), so callers pass either the
//! pool or `&mut *tx` to group several calls in one transaction. The only
//! multi-statement helper, `dining_table::create` (number check + insert),
//! takes `&mut SqliteConnection` to reuse the connection between them.

// Staff
pub mod employee;

// Catalog
pub mod product;

// Location
pub mod dining_table;

// Orders
pub mod comanda;
pub mod comanda_item;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(db_err.message().to_string());
        }
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
