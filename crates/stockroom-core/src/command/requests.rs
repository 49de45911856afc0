// ── Typed request structs for Command payloads ──
//
// Validated, API-independent payloads. Conversion into wire bodies
// happens at the edge, in `Inventory::route_command`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_api::types::{OrderBody, OrderItemBody, ProductBody, SupplierBody};

use crate::model::{EntityId, LineItem, Order, OrderStatus};

// ── Product ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub sku: String,
    pub name: String,
    pub price: Decimal,
    pub stock: i64,
}

impl From<&ProductRequest> for ProductBody {
    fn from(req: &ProductRequest) -> Self {
        Self {
            sku: req.sku.clone(),
            name: req.name.clone(),
            price: req.price,
            stock: req.stock,
        }
    }
}

// ── Supplier ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRequest {
    pub name: String,
    pub contact: String,
}

impl From<&SupplierRequest> for SupplierBody {
    fn from(req: &SupplierRequest) -> Self {
        Self {
            name: req.name.clone(),
            contact: req.contact.clone(),
        }
    }
}

// ── Order ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Always set for new orders. An edit re-sends whatever the loaded
    /// order referenced, which may be nothing.
    pub supplier_id: Option<EntityId>,
    pub status: OrderStatus,
    pub items: Vec<LineItemRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemRequest {
    pub product_id: Option<EntityId>,
    pub qty: Option<i64>,
    /// Unit price captured from the product option at composition time.
    pub price: Option<Decimal>,
}

impl OrderRequest {
    /// Re-send an existing order with a new status, keeping its supplier
    /// and line items as loaded. References go out as bare ids.
    pub fn with_status(order: &Order, status: OrderStatus) -> Self {
        Self {
            supplier_id: order.supplier.as_ref().map(|s| s.id.clone()),
            status,
            items: order.items.iter().map(LineItemRequest::from).collect(),
        }
    }
}

impl From<&LineItem> for LineItemRequest {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product.as_ref().map(|p| p.id.clone()),
            qty: item.qty,
            price: item.price,
        }
    }
}

impl From<&OrderRequest> for OrderBody {
    fn from(req: &OrderRequest) -> Self {
        Self {
            supplier_id: req.supplier_id.as_ref().map(ToString::to_string),
            status: req.status.as_str().to_owned(),
            items: req
                .items
                .iter()
                .map(|item| OrderItemBody {
                    product_id: item.product_id.as_ref().map(ToString::to_string),
                    qty: item.qty,
                    price: item.price,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductRef, SupplierRef};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn sample_order() -> Order {
        Order {
            id: "o1".into(),
            supplier: Some(SupplierRef {
                id: "s1".into(),
                name: Some("Acme".into()),
                contact: None,
            }),
            items: vec![LineItem {
                product: Some(ProductRef {
                    id: "p1".into(),
                    sku: Some("A1".into()),
                    name: Some("Widget".into()),
                }),
                qty: Some(2),
                price: Some(dec!(9.99)),
            }],
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn status_edit_keeps_supplier_and_items() {
        let req = OrderRequest::with_status(&sample_order(), OrderStatus::Shipped);
        let body = OrderBody::from(&req);

        assert_eq!(body.supplier_id.as_deref(), Some("s1"));
        assert_eq!(body.status, "shipped");
        assert_eq!(
            body.items,
            vec![OrderItemBody {
                product_id: Some("p1".into()),
                qty: Some(2),
                price: Some(dec!(9.99)),
            }]
        );
    }

    #[test]
    fn dangling_supplier_is_omitted() {
        let mut order = sample_order();
        order.supplier = None;
        let body = OrderBody::from(&OrderRequest::with_status(&order, OrderStatus::Delivered));
        assert!(body.supplier_id.is_none());
    }
}
