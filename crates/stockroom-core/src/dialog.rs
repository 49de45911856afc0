// ── Modal dialog state ──
//
// One reusable overlay, either editing an entity or showing order
// details. The dialog value owns everything the update needs (kind, id,
// loaded entity), so no "current modal" state lives anywhere else.

use crate::command::{Command, OrderRequest};
use crate::error::CoreError;
use crate::forms::{ProductForm, SupplierForm};
use crate::model::{EntityId, EntityKind, Order, OrderStatus};
use crate::view::OrderDetails;

/// Notice when an entity could not be loaded for editing.
pub const LOAD_ITEM_FAILED: &str = "Error loading item details";
/// Notice when an order could not be loaded for the details view.
pub const LOAD_DETAILS_FAILED: &str = "Error loading order details";

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Edit(EditSession),
    Details(OrderDetails),
}

/// Edit state for one loaded entity.
#[derive(Debug, Clone, PartialEq)]
pub enum EditSession {
    Product {
        id: EntityId,
        form: ProductForm,
    },
    Supplier {
        id: EntityId,
        form: SupplierForm,
    },
    /// Only the status is editable; supplier and items are re-sent as loaded.
    Order {
        order: Order,
        status: OrderStatus,
    },
}

impl EditSession {
    pub fn for_order(order: Order) -> Self {
        let status = order.status.clone();
        Self::Order { order, status }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Product { .. } => EntityKind::Product,
            Self::Supplier { .. } => EntityKind::Supplier,
            Self::Order { .. } => EntityKind::Order,
        }
    }

    pub fn id(&self) -> &EntityId {
        match self {
            Self::Product { id, .. } | Self::Supplier { id, .. } => id,
            Self::Order { order, .. } => &order.id,
        }
    }

    /// "Edit Product", etc.
    pub fn title(&self) -> String {
        format!("Edit {}", self.kind())
    }

    /// Validate the session and build the update command.
    pub fn to_command(&self) -> Result<Command, CoreError> {
        let id = self.id().clone();
        Ok(match self {
            Self::Product { form, .. } => Command::UpdateProduct {
                id,
                request: form.to_request()?,
            },
            Self::Supplier { form, .. } => Command::UpdateSupplier {
                id,
                request: form.to_request()?,
            },
            Self::Order { order, status } => Command::UpdateOrder {
                id,
                request: OrderRequest::with_status(order, status.clone()),
            },
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{LineItem, ProductRef, SupplierRef};
    use rust_decimal_macros::dec;

    #[test]
    fn order_session_updates_status_only() {
        let order = Order {
            id: "o1".into(),
            supplier: Some(SupplierRef {
                id: "s1".into(),
                name: Some("Acme".into()),
                contact: None,
            }),
            items: vec![LineItem {
                product: Some(ProductRef {
                    id: "p1".into(),
                    sku: None,
                    name: None,
                }),
                qty: Some(3),
                price: Some(dec!(2.00)),
            }],
            status: OrderStatus::Pending,
        };
        let mut session = EditSession::for_order(order);
        if let EditSession::Order { status, .. } = &mut session {
            *status = status.next();
        }

        assert_eq!(session.title(), "Edit Order");
        let Command::UpdateOrder { id, request } = session.to_command().unwrap() else {
            panic!("expected an order update");
        };
        assert_eq!(id.as_str(), "o1");
        assert_eq!(request.status, OrderStatus::Shipped);
        assert_eq!(request.supplier_id, Some("s1".into()));
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].qty, Some(3));
    }

    #[test]
    fn invalid_form_yields_no_command() {
        let session = EditSession::Supplier {
            id: "s1".into(),
            form: SupplierForm::default(),
        };
        assert!(session.to_command().is_err());
        assert_eq!(session.kind(), EntityKind::Supplier);
    }
}
