//! Inventory logic between `stockroom-api` and the front-ends (CLI / TUI).
//!
//! - **[`Inventory`]**: central facade. Fetches collections, publishes
//!   view models through `tokio::sync::watch` channels, and coordinates
//!   mutations: one request per [`Command`], then a re-fetch of the list,
//!   dropdown, and dashboard that depend on the mutated kind.
//!
//! - **[`view`]**: structured, sanitized view models (list rows, dashboard
//!   aggregate, dropdown options, order details, API status) plus
//!   [`ViewStream`] subscriptions.
//!
//! - **[`OrderComposer`]**: state of the multi-line "new order" form.
//!
//! - **[`Dialog`] / [`EditSession`]**: the reusable modal, carrying the
//!   loaded entity explicitly into the update path.

pub mod command;
pub mod composer;
pub mod config;
pub mod convert;
pub mod dialog;
pub mod error;
pub mod forms;
pub mod inventory;
pub mod model;
pub mod notice;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::requests::*;
pub use command::{Command, MutationKind};
pub use composer::{ComposerRow, OrderComposer, RowId};
pub use config::{ApiConfig, TlsVerification};
pub use dialog::{Dialog, EditSession};
pub use error::CoreError;
pub use forms::{ProductForm, SupplierForm};
pub use inventory::{Inventory, MutationOutcome};
pub use notice::{Notice, NoticeLevel};
pub use view::{
    ApiStatus, Dashboard, ListView, OrderDetails, OrderRow, ProductOption, ProductRow, RowAction,
    SupplierOption, SupplierRow, ViewStream,
};

pub use model::{
    EntityId, EntityKind, LineItem, Order, OrderStatus, Product, ProductRef, Supplier,
    SupplierRef,
};
