//! Command dispatch: bridges CLI args -> core Commands -> output formatting.

pub mod config_cmd;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod status;
pub mod suppliers;
pub mod util;

use stockroom_core::Inventory;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch an API-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    inventory: &Inventory,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Products(args) => products::handle(inventory, args, global).await,
        Command::Suppliers(args) => suppliers::handle(inventory, args, global).await,
        Command::Orders(args) => orders::handle(inventory, args, global).await,
        Command::Dashboard => dashboard::handle(inventory, global).await,
        Command::Status => status::handle(inventory, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "config and completions do not use the API".into(),
        )),
    }
}
