// ── Order domain types ──

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// Purchase order: one supplier, an ordered list of line items, a status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    /// `None` when the server sent no supplier (e.g. it was deleted).
    pub supplier: Option<SupplierRef>,
    pub items: Vec<LineItem>,
    pub status: OrderStatus,
}

/// A supplier reference as embedded in an order.
///
/// `name`/`contact` are only present when the server populated the
/// reference; a bare id leaves them empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRef {
    pub id: EntityId,
    pub name: Option<String>,
    pub contact: Option<String>,
}

/// A product reference as embedded in a line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: EntityId,
    pub sku: Option<String>,
    pub name: Option<String>,
}

/// One (product, quantity, captured unit price) tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: Option<ProductRef>,
    pub qty: Option<i64>,
    /// Unit price captured when the order was placed.
    pub price: Option<Decimal>,
}

// ── OrderStatus ─────────────────────────────────────────────────────

/// Order lifecycle status.
///
/// The three known states are selectable in forms. Anything else the
/// server reports is kept verbatim so it can still be displayed and
/// re-sent unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
    Other(String),
}

impl OrderStatus {
    /// The statuses a user can pick.
    pub const SELECTABLE: [Self; 3] = [Self::Pending, Self::Shipped, Self::Delivered];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Other(raw) => raw,
        }
    }

    /// Capitalized label for selectors.
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Other(raw) => raw,
        }
    }

    /// Next selectable status, wrapping around. Unknown statuses move to
    /// the first selectable one.
    pub fn next(&self) -> Self {
        match self {
            Self::Pending => Self::Shipped,
            Self::Shipped => Self::Delivered,
            Self::Delivered | Self::Other(_) => Self::Pending,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Pending | Self::Other(_) => Self::Delivered,
            Self::Shipped => Self::Pending,
            Self::Delivered => Self::Shipped,
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "pending" => Self::Pending,
            "shipped" => Self::Shipped,
            "delivered" => Self::Delivered,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Self::Pending,
            "shipped" => Self::Shipped,
            "delivered" => Self::Delivered,
            _ => Self::Other(raw),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_parse_exactly() {
        assert_eq!(OrderStatus::from("pending"), OrderStatus::Pending);
        assert_eq!(OrderStatus::from("delivered"), OrderStatus::Delivered);
        assert_eq!(
            OrderStatus::from("Pending"),
            OrderStatus::Other("Pending".into())
        );
    }

    #[test]
    fn unknown_status_is_preserved() {
        let status = OrderStatus::from(String::from("backordered"));
        assert_eq!(status.as_str(), "backordered");
        assert_eq!(String::from(status), "backordered");
    }

    #[test]
    fn cycling_visits_every_selectable_status() {
        let mut status = OrderStatus::Pending;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(status.clone());
            status = status.next();
        }
        assert_eq!(seen, OrderStatus::SELECTABLE.to_vec());
        assert_eq!(status, OrderStatus::Pending);
        assert_eq!(OrderStatus::Pending.prev(), OrderStatus::Delivered);
    }
}
