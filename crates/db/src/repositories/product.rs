use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::Row;

use warung_core::Product;

use super::{ProductRepository, RepositoryError};
use crate::DbPool;

pub struct SqlProductRepository {
    pool: DbPool,
}

impl SqlProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn like_pattern(fragment: &str) -> String {
    format!("%{fragment}%")
}

fn row_to_product(row: &sqlx::sqlite::SqliteRow) -> Result<Product, RepositoryError> {
    let id: i64 = row.try_get("id").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let name: String = row.try_get("name").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let stock: i64 = row.try_get("stock").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let price_str: String =
        row.try_get("price").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let created_at_str: String =
        row.try_get("created_at").map_err(|e| RepositoryError::Decode(e.to_string()))?;

    let price = Decimal::from_str(&price_str)
        .map_err(|e| RepositoryError::Decode(format!("invalid price for `{name}`: {e}")))?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    Ok(Product { id, name, stock, price, created_at })
}

#[async_trait::async_trait]
impl ProductRepository for SqlProductRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, name, stock, CAST(price AS TEXT) AS price, created_at
             FROM products ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_product).collect::<Result<Vec<_>, _>>()
    }

    async fn find_by_fragment(&self, fragment: &str) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, name, stock, CAST(price AS TEXT) AS price, created_at
             FROM products WHERE name LIKE ? ORDER BY id ASC LIMIT 1",
        )
        .bind(like_pattern(fragment))
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(ref r) => Ok(Some(row_to_product(r)?)),
            None => Ok(None),
        }
    }

    async fn decrement_matching(
        &self,
        fragment: &str,
        quantity: i64,
    ) -> Result<u64, RepositoryError> {
        // The `stock >= ?` guard makes check-then-decrement atomic for this
        // request; losers of a race update zero rows instead of going
        // negative.
        let result = sqlx::query(
            "UPDATE products SET stock = stock - ? WHERE name LIKE ? AND stock >= ?",
        )
        .bind(quantity)
        .bind(like_pattern(fragment))
        .bind(quantity)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
