// ── Domain model ──
//
// Canonical, API-independent types. Conversions from wire types live in
// `crate::convert`.

pub mod entity_id;
pub mod order;
pub mod product;
pub mod supplier;

pub use entity_id::{EntityId, EntityKind};
pub use order::{LineItem, Order, OrderStatus, ProductRef, SupplierRef};
pub use product::Product;
pub use supplier::Supplier;
