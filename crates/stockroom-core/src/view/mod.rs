// ── View models ──
//
// Everything a front-end renders: list rows, the dashboard aggregate,
// dropdown options, order details, and API status. Values are plain
// data; `Inventory` publishes them through `watch` channels and
// front-ends subscribe via `ViewStream`.

pub mod dashboard;
pub mod details;
pub mod list;
pub mod options;
pub mod rows;
pub mod status;
pub mod stream;
pub mod text;

pub use dashboard::{Dashboard, PREVIEW_LIMIT};
pub use details::OrderDetails;
pub use list::ListView;
pub use options::{ProductOption, SupplierOption};
pub use rows::{OrderRow, ProductRow, RowAction, SupplierRow};
pub use status::ApiStatus;
pub use stream::ViewStream;
