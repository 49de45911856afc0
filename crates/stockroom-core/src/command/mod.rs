// ── Command API ──
//
// All write operations flow through a unified `Command` enum. Each
// variant maps to exactly one REST request; `Inventory::execute` routes
// it and then refreshes the views that depend on its entity kind.

pub mod requests;

use crate::model::{EntityId, EntityKind};

pub use requests::{LineItemRequest, OrderRequest, ProductRequest, SupplierRequest};

/// Create, update, or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    fn past_tense(self) -> &'static str {
        match self {
            Self::Create => "created",
            Self::Update => "updated",
            Self::Delete => "deleted",
        }
    }

    fn gerund(self) -> &'static str {
        match self {
            Self::Create => "creating",
            Self::Update => "updating",
            Self::Delete => "deleting",
        }
    }
}

/// All possible write operations against the inventory API.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // ── Products ─────────────────────────────────────────────────────
    CreateProduct(ProductRequest),
    UpdateProduct {
        id: EntityId,
        request: ProductRequest,
    },
    DeleteProduct {
        id: EntityId,
    },

    // ── Suppliers ────────────────────────────────────────────────────
    CreateSupplier(SupplierRequest),
    UpdateSupplier {
        id: EntityId,
        request: SupplierRequest,
    },
    DeleteSupplier {
        id: EntityId,
    },

    // ── Orders ───────────────────────────────────────────────────────
    CreateOrder(OrderRequest),
    UpdateOrder {
        id: EntityId,
        request: OrderRequest,
    },
    DeleteOrder {
        id: EntityId,
    },
}

impl Command {
    /// Build the delete command for an entity of `kind`.
    pub fn delete(kind: EntityKind, id: EntityId) -> Self {
        match kind {
            EntityKind::Product => Self::DeleteProduct { id },
            EntityKind::Supplier => Self::DeleteSupplier { id },
            EntityKind::Order => Self::DeleteOrder { id },
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::CreateProduct(_) | Self::UpdateProduct { .. } | Self::DeleteProduct { .. } => {
                EntityKind::Product
            }
            Self::CreateSupplier(_) | Self::UpdateSupplier { .. } | Self::DeleteSupplier { .. } => {
                EntityKind::Supplier
            }
            Self::CreateOrder(_) | Self::UpdateOrder { .. } | Self::DeleteOrder { .. } => {
                EntityKind::Order
            }
        }
    }

    pub fn mutation(&self) -> MutationKind {
        match self {
            Self::CreateProduct(_) | Self::CreateSupplier(_) | Self::CreateOrder(_) => {
                MutationKind::Create
            }
            Self::UpdateProduct { .. } | Self::UpdateSupplier { .. } | Self::UpdateOrder { .. } => {
                MutationKind::Update
            }
            Self::DeleteProduct { .. } | Self::DeleteSupplier { .. } | Self::DeleteOrder { .. } => {
                MutationKind::Delete
            }
        }
    }

    /// Prompt to show before issuing the request, if it needs confirming.
    ///
    /// Only deletes are confirmed.
    pub fn confirmation_prompt(&self) -> Option<String> {
        (self.mutation() == MutationKind::Delete)
            .then(|| format!("Are you sure you want to delete this {}?", self.kind().noun()))
    }

    /// Notice shown after the request succeeded.
    pub fn success_notice(&self) -> String {
        format!("{} {} successfully!", self.kind(), self.mutation().past_tense())
    }

    /// Generic notice shown when the request failed for any reason.
    pub fn failure_notice(&self) -> String {
        format!("Error {} {}", self.mutation().gerund(), self.kind().noun())
    }
}
