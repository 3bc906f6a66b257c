//! Dining Table Repository (table registry)

use super::{RepoError, RepoResult};
use shared::models::{DiningTable, DiningTableCreate, TableStatus};
use sqlx::{SqliteConnection, SqliteExecutor, SqlitePool};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<DiningTable>> {
    let tables = sqlx::query_as::<_, DiningTable>(
        "SELECT id, number, status FROM dining_table ORDER BY number",
    )
    .fetch_all(pool)
    .await?;
    Ok(tables)
}

pub async fn find_by_id(exec: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>(
        "SELECT id, number, status FROM dining_table WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(exec)
    .await?;
    Ok(table)
}

pub async fn find_by_number(
    exec: impl SqliteExecutor<'_>,
    number: i32,
) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>(
        "SELECT id, number, status FROM dining_table WHERE number = ? LIMIT 1",
    )
    .bind(number)
    .fetch_optional(exec)
    .await?;
    Ok(table)
}

pub async fn create(conn: &mut SqliteConnection, data: DiningTableCreate) -> RepoResult<DiningTable> {
    if find_by_number(&mut *conn, data.number).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Table number {} already exists",
            data.number
        )));
    }

    let table = sqlx::query_as::<_, DiningTable>(
        "INSERT INTO dining_table (number, status) VALUES (?, ?) RETURNING id, number, status",
    )
    .bind(data.number)
    .bind(data.status.unwrap_or_default())
    .fetch_one(&mut *conn)
    .await?;
    Ok(table)
}

/// Overwrite the status; any transition is accepted here
pub async fn set_status(
    exec: impl SqliteExecutor<'_>,
    id: i64,
    status: TableStatus,
) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE dining_table SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(exec)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Dining table {id} not found")));
    }
    Ok(())
}
