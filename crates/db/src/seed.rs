//! Bootstrap seed: the two fixed catalog rows, inserted if absent.

use chrono::Utc;
use tracing::info;

use crate::repositories::RepositoryError;
use crate::DbPool;

const SEED_PRODUCTS: &[(&str, i64, &str)] =
    &[("Produk A", 10, "100000"), ("Produk B", 5, "200000")];

/// Insert the seed rows, skipping any name already present. Safe to run on
/// every startup; existing stock levels are never overwritten.
pub async fn apply(pool: &DbPool) -> Result<(), RepositoryError> {
    let now = Utc::now().to_rfc3339();

    for (name, stock, price) in SEED_PRODUCTS {
        let result = sqlx::query(
            "INSERT INTO products (name, stock, price, created_at)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(name) DO NOTHING",
        )
        .bind(name)
        .bind(stock)
        .bind(price)
        .bind(&now)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            info!(event_name = "db.seed.product_inserted", product = name, "seed row inserted");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use sqlx::Row;

    use super::apply;
    use crate::{connect_with_settings, migrations};

    #[tokio::test]
    async fn seed_is_idempotent() {
        let pool = connect_with_settings("sqlite::memory:", 1, 30).await.expect("connect");
        migrations::run_pending(&pool).await.expect("migrations");

        apply(&pool).await.expect("first seed");
        apply(&pool).await.expect("second seed");

        let count = sqlx::query("SELECT COUNT(*) AS count FROM products")
            .fetch_one(&pool)
            .await
            .expect("count")
            .get::<i64, _>("count");
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn seed_does_not_reset_mutated_stock() {
        let pool = connect_with_settings("sqlite::memory:", 1, 30).await.expect("connect");
        migrations::run_pending(&pool).await.expect("migrations");
        apply(&pool).await.expect("seed");

        sqlx::query("UPDATE products SET stock = 1 WHERE name = 'Produk A'")
            .execute(&pool)
            .await
            .expect("mutate");

        apply(&pool).await.expect("reseed");

        let stock = sqlx::query("SELECT stock FROM products WHERE name = 'Produk A'")
            .fetch_one(&pool)
            .await
            .expect("fetch")
            .get::<i64, _>("stock");
        assert_eq!(stock, 1, "reseeding must not overwrite mutated rows");
    }
}
