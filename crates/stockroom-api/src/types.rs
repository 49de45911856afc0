// Wire types for the inventory REST API.
//
// The server stores documents with an `_id` key and embeds ("populates")
// referenced suppliers and products inside orders. Any field may be
// missing on older documents, so response fields are optional and the
// core layer decides what to render in their place.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ── References ───────────────────────────────────────────────────────

/// A reference that the server may return either populated (the full
/// sub-document) or as a bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Populated<T> {
    Object(T),
    Id(String),
}

/// Documents that carry a server-assigned id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl<T: Identified> Populated<T> {
    /// The referenced document's id, whichever shape was received.
    pub fn id(&self) -> &str {
        match self {
            Self::Object(obj) => obj.id(),
            Self::Id(id) => id,
        }
    }

    /// The embedded document, if the server populated it.
    pub fn object(&self) -> Option<&T> {
        match self {
            Self::Object(obj) => Some(obj),
            Self::Id(_) => None,
        }
    }
}

// ── Products ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub stock: Option<i64>,
}

impl Identified for ProductResponse {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `POST /products` and `PUT /products/{id}` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductBody {
    pub sku: String,
    pub name: String,
    pub price: Decimal,
    pub stock: i64,
}

// ── Suppliers ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierResponse {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
}

impl Identified for SupplierResponse {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `POST /suppliers` and `PUT /suppliers/{id}` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierBody {
    pub name: String,
    pub contact: String,
}

// ── Orders ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "supplierId", default)]
    pub supplier: Option<Populated<SupplierResponse>>,
    #[serde(default)]
    pub items: Option<Vec<OrderItemResponse>>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemResponse {
    #[serde(rename = "productId", default)]
    pub product: Option<Populated<ProductResponse>>,
    #[serde(default)]
    pub qty: Option<i64>,
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// `POST /orders` and `PUT /orders/{id}` body.
///
/// References are always sent as bare ids. An edit re-sends whatever the
/// loaded order carried, which may be nothing for a dangling reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    pub status: String,
    pub items: Vec<OrderItemBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}
