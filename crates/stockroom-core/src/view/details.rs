// ── Read-only order details ──

use serde::Serialize;

use super::rows::status_label;
use super::text::{count, money, text_or};
use crate::model::{EntityId, LineItem, Order};

const UNKNOWN: &str = "Unknown";

/// Shown in place of item lines for an order with no items.
pub const NO_ITEMS: &str = "No items in this order";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetails {
    pub id: EntityId,
    pub supplier: String,
    pub contact: String,
    pub status: String,
    /// `SKU: name - Qty: n, Price: $p`, one per line item.
    pub lines: Vec<String>,
    pub total_items: usize,
}

impl OrderDetails {
    /// Item lines, or the single "no items" line.
    pub fn item_lines(&self) -> Vec<&str> {
        if self.lines.is_empty() {
            vec![NO_ITEMS]
        } else {
            self.lines.iter().map(String::as_str).collect()
        }
    }
}

impl From<&Order> for OrderDetails {
    fn from(o: &Order) -> Self {
        let supplier = o.supplier.as_ref();
        Self {
            id: o.id.clone(),
            supplier: text_or(supplier.and_then(|s| s.name.as_deref()), UNKNOWN),
            contact: text_or(supplier.and_then(|s| s.contact.as_deref()), UNKNOWN),
            status: status_label(&o.status),
            lines: o.items.iter().map(item_line).collect(),
            total_items: o.items.len(),
        }
    }
}

fn item_line(item: &LineItem) -> String {
    let product = item.product.as_ref();
    format!(
        "{}: {} - Qty: {}, Price: {}",
        text_or(product.and_then(|p| p.sku.as_deref()), UNKNOWN),
        text_or(product.and_then(|p| p.name.as_deref()), "Unknown Product"),
        count(item.qty),
        money(item.price),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderStatus, ProductRef, SupplierRef};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn details_list_every_item_with_captured_price() {
        let order = Order {
            id: "o1".into(),
            supplier: Some(SupplierRef {
                id: "s1".into(),
                name: Some("Acme".into()),
                contact: Some("ops@acme.test".into()),
            }),
            items: vec![
                LineItem {
                    product: Some(ProductRef {
                        id: "p1".into(),
                        sku: Some("A1".into()),
                        name: Some("Widget".into()),
                    }),
                    qty: Some(2),
                    price: Some(dec!(9.99)),
                },
                LineItem {
                    product: Some(ProductRef {
                        id: "p2".into(),
                        sku: None,
                        name: None,
                    }),
                    qty: Some(1),
                    price: Some(dec!(4.50)),
                },
            ],
            status: OrderStatus::Shipped,
        };

        let details = OrderDetails::from(&order);
        assert_eq!(details.supplier, "Acme");
        assert_eq!(details.contact, "ops@acme.test");
        assert_eq!(details.status, "shipped");
        assert_eq!(details.total_items, 2);
        assert_eq!(
            details.item_lines(),
            vec![
                "A1: Widget - Qty: 2, Price: $9.99",
                "Unknown: Unknown Product - Qty: 1, Price: $4.5",
            ]
        );
    }

    #[test]
    fn empty_order_shows_no_items_line() {
        let details = OrderDetails::from(&Order {
            id: "o2".into(),
            supplier: None,
            items: Vec::new(),
            status: OrderStatus::Pending,
        });
        assert_eq!(details.supplier, "Unknown");
        assert_eq!(details.contact, "Unknown");
        assert_eq!(details.item_lines(), vec![NO_ITEMS]);
        assert_eq!(details.total_items, 0);
    }
}
