//! Product Repository (catalog)

use super::{RepoError, RepoResult};
use shared::models::{Product, ProductCreate};
use sqlx::{SqliteExecutor, SqlitePool};

/// Maximum allowed unit price
const MAX_PRICE: f64 = 1_000_000.0;

fn validate_price(price: f64) -> RepoResult<()> {
    if !price.is_finite() {
        return Err(RepoError::Validation(format!(
            "price must be a finite number, got {price}"
        )));
    }
    if price < 0.0 {
        return Err(RepoError::Validation(format!(
            "price must be non-negative, got {price}"
        )));
    }
    if price > MAX_PRICE {
        return Err(RepoError::Validation(format!(
            "price exceeds maximum allowed ({MAX_PRICE}), got {price}"
        )));
    }
    Ok(())
}

/// Whole catalog in storage order
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, category FROM product ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(products)
}

pub async fn find_by_id(exec: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, category FROM product WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(exec)
    .await?;
    Ok(product)
}

pub async fn create(exec: impl SqliteExecutor<'_>, data: ProductCreate) -> RepoResult<Product> {
    validate_price(data.price)?;
    if data.name.trim().is_empty() {
        return Err(RepoError::Validation("product name must not be empty".into()));
    }

    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO product (name, description, price, category) VALUES (?, ?, ?, ?) RETURNING id, name, description, price, category",
    )
    .bind(data.name)
    .bind(data.description)
    .bind(data.price)
    .bind(data.category)
    .fetch_one(exec)
    .await?;
    Ok(product)
}
