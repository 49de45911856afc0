//! All UI actions. Actions are the sole mechanism for state mutation.

use std::sync::Arc;

use stockroom_core::{
    ApiStatus, Command, Dashboard, EditSession, EntityId, EntityKind, ListView, MutationKind,
    Notice, OrderDetails, OrderRow, ProductOption, ProductRow, SupplierOption, SupplierRow,
};

use crate::screen::ScreenId;

#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ───────────────────────────────────────────────
    SwitchScreen(ScreenId),
    ToggleHelp,

    // ── Published views (from the data bridge) ───────────────────
    ProductsUpdated(ListView<ProductRow>),
    SuppliersUpdated(ListView<SupplierRow>),
    OrdersUpdated(ListView<OrderRow>),
    DashboardUpdated(Dashboard),
    ProductOptionsUpdated(Arc<Vec<ProductOption>>),
    SupplierOptionsUpdated(Arc<Vec<SupplierOption>>),
    ApiStatusUpdated(ApiStatus),

    // ── Refresh requests ─────────────────────────────────────────
    Refresh(EntityKind),
    RefreshDashboard,
    RefreshProductOptions,

    // ── Dialog ───────────────────────────────────────────────────
    OpenEdit(EntityKind, EntityId),
    OpenDetails(EntityId),
    EditLoaded(EditSession),
    DetailsLoaded(OrderDetails),
    CloseDialog,

    // ── Mutations ────────────────────────────────────────────────
    RequestDelete(EntityKind, EntityId),
    ConfirmYes,
    ConfirmNo,
    Submit(Command),
    MutationFinished {
        kind: EntityKind,
        mutation: MutationKind,
        applied: bool,
    },

    // ── Notices ──────────────────────────────────────────────────
    Notify(Notice),
    DismissNotification,
}

/// A delete waiting for the user to answer the confirm dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingConfirm {
    pub prompt: String,
    pub command: Command,
}

impl PendingConfirm {
    /// `None` for commands that go through without confirmation.
    pub fn for_command(command: Command) -> Option<Self> {
        let prompt = command.confirmation_prompt()?;
        Some(Self { prompt, command })
    }
}
