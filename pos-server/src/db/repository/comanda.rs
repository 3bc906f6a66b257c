//! Comanda Repository (order ledger)

use super::{RepoError, RepoResult};
use shared::models::{Comanda, OrderStatus};
use sqlx::SqliteExecutor;

const COLUMNS: &str = "id, status, created_at, total, table_id, employee_id";

pub async fn find_by_id(exec: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<Comanda>> {
    let comanda = sqlx::query_as::<_, Comanda>(&format!(
        "SELECT {COLUMNS} FROM comanda WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(exec)
    .await?;
    Ok(comanda)
}

/// The table's open comanda; the lowest id wins if more than one is open
pub async fn find_open_by_table(
    exec: impl SqliteExecutor<'_>,
    table_id: i64,
) -> RepoResult<Option<Comanda>> {
    let comanda = sqlx::query_as::<_, Comanda>(&format!(
        "SELECT {COLUMNS} FROM comanda WHERE table_id = ? AND status = ? ORDER BY id LIMIT 1"
    ))
    .bind(table_id)
    .bind(OrderStatus::Open)
    .fetch_optional(exec)
    .await?;
    Ok(comanda)
}

/// Open a new comanda (status aberto, total 0)
pub async fn create(
    exec: impl SqliteExecutor<'_>,
    table_id: i64,
    employee_id: i64,
) -> RepoResult<Comanda> {
    let now = shared::util::now_millis();
    let comanda = sqlx::query_as::<_, Comanda>(&format!(
        "INSERT INTO comanda (status, created_at, total, table_id, employee_id) VALUES (?, ?, 0, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(OrderStatus::Open)
    .bind(now)
    .bind(table_id)
    .bind(employee_id)
    .fetch_one(exec)
    .await?;
    Ok(comanda)
}

/// Mark closed; closing an already closed comanda is accepted
pub async fn close(exec: impl SqliteExecutor<'_>, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE comanda SET status = ? WHERE id = ?")
        .bind(OrderStatus::Closed)
        .bind(id)
        .execute(exec)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Comanda {id} not found")));
    }
    Ok(())
}

/// Write back the cached total
pub async fn update_total(exec: impl SqliteExecutor<'_>, id: i64, total: f64) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE comanda SET total = ? WHERE id = ?")
        .bind(total)
        .bind(id)
        .execute(exec)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Comanda {id} not found")));
    }
    Ok(())
}
