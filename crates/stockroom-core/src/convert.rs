// ── API-to-domain type conversions ──
//
// Bridges raw `stockroom_api::types` responses into `stockroom_core::model`
// domain types. Populated references keep their embedded fields; bare-id
// references keep only the id.

use stockroom_api::types::{
    OrderItemResponse, OrderResponse, Populated, ProductResponse, SupplierResponse,
};

use crate::model::{LineItem, Order, OrderStatus, Product, ProductRef, Supplier, SupplierRef};

// ── Products ───────────────────────────────────────────────────────

impl From<ProductResponse> for Product {
    fn from(p: ProductResponse) -> Self {
        Self {
            id: p.id.into(),
            sku: p.sku,
            name: p.name,
            price: p.price,
            stock: p.stock,
        }
    }
}

// ── Suppliers ──────────────────────────────────────────────────────

impl From<SupplierResponse> for Supplier {
    fn from(s: SupplierResponse) -> Self {
        Self {
            id: s.id.into(),
            name: s.name,
            contact: s.contact,
        }
    }
}

// ── Orders ─────────────────────────────────────────────────────────

impl From<Populated<SupplierResponse>> for SupplierRef {
    fn from(r: Populated<SupplierResponse>) -> Self {
        match r {
            Populated::Object(s) => Self {
                id: s.id.into(),
                name: s.name,
                contact: s.contact,
            },
            Populated::Id(id) => Self {
                id: id.into(),
                name: None,
                contact: None,
            },
        }
    }
}

impl From<Populated<ProductResponse>> for ProductRef {
    fn from(r: Populated<ProductResponse>) -> Self {
        match r {
            Populated::Object(p) => Self {
                id: p.id.into(),
                sku: p.sku,
                name: p.name,
            },
            Populated::Id(id) => Self {
                id: id.into(),
                sku: None,
                name: None,
            },
        }
    }
}

impl From<OrderItemResponse> for LineItem {
    fn from(item: OrderItemResponse) -> Self {
        Self {
            product: item.product.map(ProductRef::from),
            qty: item.qty,
            price: item.price,
        }
    }
}

impl From<OrderResponse> for Order {
    fn from(o: OrderResponse) -> Self {
        Self {
            id: o.id.into(),
            supplier: o.supplier.map(SupplierRef::from),
            items: o
                .items
                .unwrap_or_default()
                .into_iter()
                .map(LineItem::from)
                .collect(),
            status: o.status.map_or(OrderStatus::Other(String::new()), OrderStatus::from),
        }
    }
}
