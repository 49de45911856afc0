// ── Supplier domain type ──

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: EntityId,
    pub name: Option<String>,
    /// Free-form contact string (email, phone, person).
    pub contact: Option<String>,
}
