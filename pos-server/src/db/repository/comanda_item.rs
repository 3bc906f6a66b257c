//! Comanda Item Repository (order line items)

use super::{RepoError, RepoResult};
use shared::models::ComandaItem;
use sqlx::SqliteExecutor;

pub async fn find_by_id(exec: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<ComandaItem>> {
    let item = sqlx::query_as::<_, ComandaItem>(
        "SELECT id, quantity, comanda_id, product_id FROM comanda_item WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(exec)
    .await?;
    Ok(item)
}

/// Lines of a comanda in insertion order
pub async fn find_by_comanda(
    exec: impl SqliteExecutor<'_>,
    comanda_id: i64,
) -> RepoResult<Vec<ComandaItem>> {
    let items = sqlx::query_as::<_, ComandaItem>(
        "SELECT id, quantity, comanda_id, product_id FROM comanda_item WHERE comanda_id = ? ORDER BY id",
    )
    .bind(comanda_id)
    .fetch_all(exec)
    .await?;
    Ok(items)
}

/// Append a line; every call creates a new row, lines are never merged
pub async fn add(
    exec: impl SqliteExecutor<'_>,
    comanda_id: i64,
    product_id: i64,
    quantity: i32,
) -> RepoResult<ComandaItem> {
    if quantity < 1 {
        return Err(RepoError::Validation(format!(
            "quantity must be positive, got {quantity}"
        )));
    }

    let item = sqlx::query_as::<_, ComandaItem>(
        "INSERT INTO comanda_item (quantity, comanda_id, product_id) VALUES (?, ?, ?) RETURNING id, quantity, comanda_id, product_id",
    )
    .bind(quantity)
    .bind(comanda_id)
    .bind(product_id)
    .fetch_one(exec)
    .await?;
    Ok(item)
}

/// Returns `false` when no such line exists
pub async fn delete(exec: impl SqliteExecutor<'_>, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM comanda_item WHERE id = ?")
        .bind(id)
        .execute(exec)
        .await?;
    Ok(rows.rows_affected() > 0)
}
