// ── Product domain type ──

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    /// Unique display code.
    pub sku: Option<String>,
    pub name: Option<String>,
    /// Unit price in the store currency.
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
}
