// ── Core identity types ──
//
// The inventory API hands out opaque document ids (`_id`). `EntityId`
// wraps them so ids of different sources cannot be mixed up with
// free-form text, and `EntityKind` names the three resource kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── EntityId ────────────────────────────────────────────────────────

/// Server-assigned identifier of a product, supplier, or order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── EntityKind ──────────────────────────────────────────────────────

/// One of the three resource kinds the API serves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Product,
    Supplier,
    Order,
}

impl EntityKind {
    /// Lower-case noun used in notices ("Error deleting product").
    pub fn noun(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Supplier => "supplier",
            Self::Order => "order",
        }
    }

    /// REST collection path segment.
    pub fn collection(self) -> &'static str {
        match self {
            Self::Product => "products",
            Self::Supplier => "suppliers",
            Self::Order => "orders",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn entity_id_round_trips_through_display() {
        let id: EntityId = "65f1c0ffee".parse().unwrap();
        assert_eq!(id.to_string(), "65f1c0ffee");
        assert_eq!(id.as_str(), "65f1c0ffee");
    }

    #[test]
    fn entity_id_serializes_as_plain_string() {
        let id = EntityId::from("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }

    #[test]
    fn kind_names() {
        assert_eq!(EntityKind::Supplier.to_string(), "Supplier");
        assert_eq!(EntityKind::Supplier.noun(), "supplier");
        assert_eq!(EntityKind::Supplier.collection(), "suppliers");
        assert_eq!("ORDER".parse::<EntityKind>().unwrap(), EntityKind::Order);
        assert_eq!(EntityKind::iter().count(), 3);
    }
}
