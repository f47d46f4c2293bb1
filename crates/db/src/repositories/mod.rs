use async_trait::async_trait;
use thiserror::Error;

use warung_core::Product;

pub mod memory;
pub mod product;

pub use memory::InMemoryProductRepository;
pub use product::SqlProductRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

/// Catalog access injected into the reply service. Lookups are deliberately
/// loose: `fragment` is matched as a substring of stored names, so more
/// than one row can match, and `decrement_matching` updates every matching
/// row that still has sufficient stock. A stricter uniqueness policy can
/// replace this implementation without touching callers.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All rows, in insertion order. Used for the AI fallback prompt.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    /// First row whose name contains `fragment` (ASCII case-insensitive).
    async fn find_by_fragment(&self, fragment: &str) -> Result<Option<Product>, RepositoryError>;

    /// Decrement stock by `quantity` for every matching row that has at
    /// least `quantity` in stock, in a single conditional statement. Returns
    /// the number of rows updated; zero means a concurrent order drained the
    /// stock between check and decrement. Stock can never go negative.
    async fn decrement_matching(
        &self,
        fragment: &str,
        quantity: i64,
    ) -> Result<u64, RepositoryError>;
}
