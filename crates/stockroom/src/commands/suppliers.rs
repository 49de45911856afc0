//! Supplier command handlers.

use tabled::Tabled;

use stockroom_core::view::list::empty_placeholder;
use stockroom_core::{
    Command as CoreCommand, EditSession, EntityId, EntityKind, Inventory, Supplier,
    SupplierRequest, SupplierRow,
};

use crate::cli::{GlobalOpts, SuppliersArgs, SuppliersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct SupplierTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Contact")]
    contact: String,
}

impl From<&Supplier> for SupplierTableRow {
    fn from(s: &Supplier) -> Self {
        let row = SupplierRow::from(s);
        Self {
            id: row.id.into_inner(),
            name: row.name,
            contact: row.contact,
        }
    }
}

pub async fn handle(
    inventory: &Inventory,
    args: SuppliersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SuppliersCommand::List => {
            let suppliers = inventory.fetch_suppliers().await?;
            let out = output::render_list(
                &global.output,
                &suppliers,
                &empty_placeholder(EntityKind::Supplier),
                |s| SupplierTableRow::from(s),
                |s| s.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SuppliersCommand::Get { id } => {
            let supplier = inventory.get_supplier(&EntityId::from(id)).await?;
            let out = output::render_single(
                &global.output,
                &supplier,
                |s| {
                    let row = SupplierRow::from(s);
                    output::detail_lines(&[
                        ("ID", row.id.to_string()),
                        ("Name", row.name),
                        ("Contact", row.contact),
                    ])
                },
                |s| s.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SuppliersCommand::Create { name, contact } => {
            let cmd = CoreCommand::CreateSupplier(SupplierRequest { name, contact });
            util::apply(inventory, cmd, global).await
        }

        SuppliersCommand::Update { id, name, contact } => {
            let mut session = inventory
                .open_edit(EntityKind::Supplier, &EntityId::from(id))
                .await?;
            if let EditSession::Supplier { form, .. } = &mut session {
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(contact) = contact {
                    form.contact = contact;
                }
            }
            let cmd = session.to_command()?;
            util::apply(inventory, cmd, global).await
        }

        SuppliersCommand::Delete { id } => {
            let cmd = CoreCommand::delete(EntityKind::Supplier, EntityId::from(id));
            util::apply(inventory, cmd, global).await
        }
    }
}
