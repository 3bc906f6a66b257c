//! Employee Repository (staff who open orders)

use super::{RepoError, RepoResult};
use shared::models::{Employee, EmployeeCreate};
use sqlx::SqliteExecutor;

/// Hash password using argon2
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
    };

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(password_hash.to_string())
}

pub async fn find_by_id(exec: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, name, phone, password_hash FROM employee WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(exec)
    .await?;
    Ok(employee)
}

pub async fn create(exec: impl SqliteExecutor<'_>, data: EmployeeCreate) -> RepoResult<Employee> {
    if data.phone.trim().is_empty() {
        return Err(RepoError::Validation("phone must not be empty".into()));
    }
    let password_hash = hash_password(&data.password)
        .map_err(|e| RepoError::Validation(format!("Failed to hash password: {e}")))?;

    let employee = sqlx::query_as::<_, Employee>(
        "INSERT INTO employee (name, phone, password_hash) VALUES (?, ?, ?) RETURNING id, name, phone, password_hash",
    )
    .bind(data.name)
    .bind(data.phone)
    .bind(password_hash)
    .fetch_one(exec)
    .await?;
    Ok(employee)
}
