//! API reachability check.

use stockroom_core::Inventory;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub async fn handle(inventory: &Inventory, global: &GlobalOpts) -> Result<(), CliError> {
    let status = inventory.check_status().await;
    if status.is_connected() {
        output::print_output(status.label(), global.quiet);
        return Ok(());
    }
    Err(CliError::ApiUnavailable {
        url: inventory.base_url().to_string(),
        status: status.label().into(),
    })
}
