// ── Row view models ──
//
// One struct per list screen. Every field is pre-formatted, sanitized
// display text; front-ends only lay it out.

use serde::Serialize;

use super::text::{count, money, text, text_or};
use crate::model::{EntityId, Order, OrderStatus, Product, Supplier};

/// Inline controls offered on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowAction {
    Edit,
    Delete,
    ViewDetails,
}

const EDIT_DELETE: &[RowAction] = &[RowAction::Edit, RowAction::Delete];
const ORDER_ACTIONS: &[RowAction] = &[RowAction::ViewDetails, RowAction::Edit, RowAction::Delete];

/// Placeholder for an order whose supplier is unknown.
pub const UNKNOWN_SUPPLIER: &str = "Unknown Supplier";

// ── Products ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: EntityId,
    pub sku: String,
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl ProductRow {
    pub fn actions(&self) -> &'static [RowAction] {
        EDIT_DELETE
    }
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            sku: text(p.sku.as_deref()),
            name: text(p.name.as_deref()),
            price: money(p.price),
            stock: count(p.stock),
        }
    }
}

// ── Suppliers ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierRow {
    pub id: EntityId,
    pub name: String,
    pub contact: String,
}

impl SupplierRow {
    pub fn actions(&self) -> &'static [RowAction] {
        EDIT_DELETE
    }
}

impl From<&Supplier> for SupplierRow {
    fn from(s: &Supplier) -> Self {
        Self {
            id: s.id.clone(),
            name: text(s.name.as_deref()),
            contact: text(s.contact.as_deref()),
        }
    }
}

// ── Orders ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    pub id: EntityId,
    pub supplier: String,
    /// "N items": the number of line items, not the sum of quantities.
    pub items: String,
    pub status: OrderStatus,
    /// Sanitized status text for display.
    pub status_label: String,
}

impl OrderRow {
    pub fn actions(&self) -> &'static [RowAction] {
        ORDER_ACTIONS
    }
}

impl From<&Order> for OrderRow {
    fn from(o: &Order) -> Self {
        Self {
            id: o.id.clone(),
            supplier: supplier_name(o, UNKNOWN_SUPPLIER),
            items: format!("{} items", o.items.len()),
            status: o.status.clone(),
            status_label: status_label(&o.status),
        }
    }
}

pub(crate) fn supplier_name(order: &Order, placeholder: &str) -> String {
    text_or(
        order.supplier.as_ref().and_then(|s| s.name.as_deref()),
        placeholder,
    )
}

pub(crate) fn status_label(status: &OrderStatus) -> String {
    match status.as_str() {
        "" => text(None),
        raw => text(Some(raw)),
    }
}
