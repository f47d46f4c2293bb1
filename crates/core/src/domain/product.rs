use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog row. `name` doubles as the fuzzy lookup key for inbound
/// messages; `id` exists only for storage identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub stock: i64,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn has_stock_for(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}
