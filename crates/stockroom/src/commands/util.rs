//! Shared helpers for command handlers.

use std::io::IsTerminal;

use stockroom_core::{Command as CoreCommand, Inventory, MutationOutcome};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Refuses to prompt when stdin is not a terminal.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Run a mutation through the coordinator and report its notice.
///
/// Deletes are confirmed first (or auto-approved with `--yes`); a declined
/// prompt sends nothing and exits successfully.
pub async fn apply(
    inventory: &Inventory,
    cmd: CoreCommand,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut prompt_error = None;
    let outcome = inventory
        .apply(cmd, |prompt| match confirm(prompt, global.yes) {
            Ok(answer) => answer,
            Err(e) => {
                prompt_error = Some(e);
                false
            }
        })
        .await;
    if let Some(e) = prompt_error {
        return Err(e);
    }

    match outcome {
        MutationOutcome::Applied { notice } => {
            output::print_notice(&notice.message, global.quiet);
            Ok(())
        }
        MutationOutcome::Failed { notice, error } => {
            Err(CliError::from(error).during(&notice.message))
        }
        MutationOutcome::Declined => {
            output::print_notice("Cancelled", global.quiet);
            Ok(())
        }
    }
}
