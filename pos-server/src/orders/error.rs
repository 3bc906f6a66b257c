//! Order Service errors

use crate::db::repository::RepoError;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    /// A required id was absent from the request
    #[error("Missing field: {0}")]
    InvalidInput(&'static str),

    #[error("Table {0} not found")]
    TableNotFound(i64),

    #[error("Product {0} not found")]
    ProductNotFound(i64),

    #[error("Order item {0} not found")]
    ItemNotFound(i64),

    #[error("Order {0} not found")]
    OrderNotFound(i64),

    #[error("Employee {0} not found")]
    EmployeeNotFound(i64),

    /// Another open comanda already exists for the table
    #[error("Table {0} already has an open order")]
    Conflict(i64),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<sqlx::Error> for OrderError {
    fn from(err: sqlx::Error) -> Self {
        OrderError::Repo(err.into())
    }
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::InvalidInput(field) => AppError::required_field(field),
            OrderError::TableNotFound(id) => {
                AppError::with_message(ErrorCode::TableNotFound, "Mesa não encontrada.")
                    .with_detail("mesa_id", id)
            }
            OrderError::ProductNotFound(id) => {
                AppError::with_message(ErrorCode::ProductNotFound, "Produto não encontrado.")
                    .with_detail("produto_id", id)
            }
            OrderError::ItemNotFound(id) => AppError::with_message(
                ErrorCode::OrderItemNotFound,
                "Item não encontrado no pedido.",
            )
            .with_detail("item_id", id),
            OrderError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, "Pedido não encontrado.")
                    .with_detail("pedido_id", id)
            }
            OrderError::EmployeeNotFound(id) => {
                AppError::with_message(ErrorCode::EmployeeNotFound, "Garçom não encontrado.")
                    .with_detail("garcom_id", id)
            }
            OrderError::Conflict(id) => AppError::with_message(
                ErrorCode::OrderAlreadyOpen,
                "Mesa já possui um pedido aberto.",
            )
            .with_detail("mesa_id", id),
            OrderError::Repo(e) => e.into(),
        }
    }
}
