//! Data bridge: forwards [`Inventory`] view streams into TUI actions.
//!
//! Subscribes to every published view, kicks off the initial load, then
//! forwards each publication as an [`Action`] until cancelled.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use stockroom_core::Inventory;

use crate::action::Action;

pub async fn spawn_data_bridge(
    inventory: Inventory,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let mut products = inventory.products();
    let mut suppliers = inventory.suppliers();
    let mut orders = inventory.orders();
    let mut dashboard = inventory.dashboard();
    let mut product_options = inventory.product_options();
    let mut supplier_options = inventory.supplier_options();
    let mut api_status = inventory.api_status();

    // Snapshots first, so screens leave their empty state immediately
    let _ = action_tx.send(Action::ProductsUpdated(products.current().clone()));
    let _ = action_tx.send(Action::SuppliersUpdated(suppliers.current().clone()));
    let _ = action_tx.send(Action::OrdersUpdated(orders.current().clone()));
    let _ = action_tx.send(Action::DashboardUpdated(dashboard.current().clone()));
    let _ = action_tx.send(Action::ProductOptionsUpdated(
        product_options.current().clone(),
    ));
    let _ = action_tx.send(Action::SupplierOptionsUpdated(
        supplier_options.current().clone(),
    ));
    let _ = action_tx.send(Action::ApiStatusUpdated(*api_status.current()));

    let loader = inventory.clone();
    let load_cancel = cancel.clone();
    tokio::spawn(async move {
        tokio::select! {
            () = load_cancel.cancelled() => {}
            () = loader.load_all() => debug!("initial load finished"),
        }
    });

    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            Some(status) = api_status.changed() => {
                let _ = action_tx.send(Action::ApiStatusUpdated(status));
            }
            Some(view) = products.changed() => {
                debug!("dispatching ProductsUpdated");
                let _ = action_tx.send(Action::ProductsUpdated(view));
            }
            Some(view) = suppliers.changed() => {
                let _ = action_tx.send(Action::SuppliersUpdated(view));
            }
            Some(view) = orders.changed() => {
                let _ = action_tx.send(Action::OrdersUpdated(view));
            }
            Some(dash) = dashboard.changed() => {
                let _ = action_tx.send(Action::DashboardUpdated(dash));
            }
            Some(options) = product_options.changed() => {
                let _ = action_tx.send(Action::ProductOptionsUpdated(options));
            }
            Some(options) = supplier_options.changed() => {
                let _ = action_tx.send(Action::SupplierOptionsUpdated(options));
            }
        }
    }

    debug!("data bridge shut down");
}
