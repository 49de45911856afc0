// ── Dashboard aggregate ──

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::rows::{UNKNOWN_SUPPLIER, status_label, supplier_name};
use super::text::{count, money, text};
use crate::model::{Order, OrderStatus, Product, Supplier};

/// How many products and orders the dashboard previews.
pub const PREVIEW_LIMIT: usize = 5;

/// Totals plus a short preview of the first products and orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dashboard {
    pub total_products: usize,
    pub total_suppliers: usize,
    pub total_orders: usize,
    /// Orders whose status is exactly `pending`.
    pub pending_orders: usize,
    /// `SKU: name - $price (Stock: n)` for the first products received.
    pub recent_products: Vec<String>,
    /// `Order: supplier - status` for the first orders received.
    pub recent_orders: Vec<String>,
    /// `None` until the first successful refresh.
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl Dashboard {
    pub fn build(
        products: &[Product],
        suppliers: &[Supplier],
        orders: &[Order],
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            total_products: products.len(),
            total_suppliers: suppliers.len(),
            total_orders: orders.len(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            recent_products: products
                .iter()
                .take(PREVIEW_LIMIT)
                .map(product_preview)
                .collect(),
            recent_orders: orders
                .iter()
                .take(PREVIEW_LIMIT)
                .map(order_preview)
                .collect(),
            refreshed_at: Some(now),
        }
    }
}

fn product_preview(p: &Product) -> String {
    format!(
        "{}: {} - {} (Stock: {})",
        text(p.sku.as_deref()),
        text(p.name.as_deref()),
        money(p.price),
        count(p.stock),
    )
}

fn order_preview(o: &Order) -> String {
    format!(
        "Order: {} - {}",
        supplier_name(o, UNKNOWN_SUPPLIER),
        status_label(&o.status)
    )
}
