//! In-memory repository double for service and handler tests.

use std::sync::Mutex;

use warung_core::Product;

use super::{ProductRepository, RepositoryError};

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products: Mutex::new(products) }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Product>>, RepositoryError> {
        self.products
            .lock()
            .map_err(|_| RepositoryError::Decode("product store lock is poisoned".to_string()))
    }

    fn matches(name: &str, fragment: &str) -> bool {
        name.to_lowercase().contains(&fragment.to_lowercase())
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.lock()?.clone())
    }

    async fn find_by_fragment(&self, fragment: &str) -> Result<Option<Product>, RepositoryError> {
        Ok(self.lock()?.iter().find(|product| Self::matches(&product.name, fragment)).cloned())
    }

    async fn decrement_matching(
        &self,
        fragment: &str,
        quantity: i64,
    ) -> Result<u64, RepositoryError> {
        let mut products = self.lock()?;
        let mut updated = 0;
        for product in products.iter_mut() {
            if Self::matches(&product.name, fragment) && product.stock >= quantity {
                product.stock -= quantity;
                updated += 1;
            }
        }
        Ok(updated)
    }
}
