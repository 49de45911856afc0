// ── Dropdown options ──
//
// Selector entries derived from a fresh collection fetch.

use rust_decimal::Decimal;
use serde::Serialize;

use super::text::{money, text};
use crate::model::{EntityId, Product, Supplier};

/// A product selector entry, tagged with the price an order line captures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductOption {
    pub id: EntityId,
    /// `SKU - name ($price)`.
    pub label: String,
    pub price: Option<Decimal>,
}

impl From<&Product> for ProductOption {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            label: format!(
                "{} - {} ({})",
                text(p.sku.as_deref()),
                text(p.name.as_deref()),
                money(p.price)
            ),
            price: p.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierOption {
    pub id: EntityId,
    pub label: String,
}

impl From<&Supplier> for SupplierOption {
    fn from(s: &Supplier) -> Self {
        Self {
            id: s.id.clone(),
            label: text(s.name.as_deref()),
        }
    }
}
