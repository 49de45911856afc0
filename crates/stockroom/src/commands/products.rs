//! Product command handlers.

use tabled::Tabled;

use stockroom_core::view::list::empty_placeholder;
use stockroom_core::{
    Command as CoreCommand, EditSession, EntityId, EntityKind, Inventory, Product, ProductRequest,
    ProductRow,
};

use crate::cli::{GlobalOpts, ProductsArgs, ProductsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProductTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "SKU")]
    sku: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Stock")]
    stock: String,
}

impl From<&Product> for ProductTableRow {
    fn from(p: &Product) -> Self {
        let row = ProductRow::from(p);
        Self {
            id: row.id.into_inner(),
            sku: row.sku,
            name: row.name,
            price: row.price,
            stock: row.stock,
        }
    }
}

fn detail(p: &Product) -> String {
    let row = ProductRow::from(p);
    output::detail_lines(&[
        ("ID", row.id.to_string()),
        ("SKU", row.sku),
        ("Name", row.name),
        ("Price", row.price),
        ("Stock", row.stock),
    ])
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    inventory: &Inventory,
    args: ProductsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProductsCommand::List => {
            let products = inventory.fetch_products().await?;
            let out = output::render_list(
                &global.output,
                &products,
                &empty_placeholder(EntityKind::Product),
                |p| ProductTableRow::from(p),
                |p| p.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::Get { id } => {
            let product = inventory.get_product(&EntityId::from(id)).await?;
            let out = output::render_single(&global.output, &product, detail, |p| {
                p.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::Create {
            sku,
            name,
            price,
            stock,
        } => {
            let request = ProductRequest {
                sku,
                name,
                price,
                stock,
            };
            util::apply(inventory, CoreCommand::CreateProduct(request), global).await
        }

        ProductsCommand::Update {
            id,
            sku,
            name,
            price,
            stock,
        } => {
            let mut session = inventory
                .open_edit(EntityKind::Product, &EntityId::from(id))
                .await?;
            if let EditSession::Product { form, .. } = &mut session {
                if let Some(sku) = sku {
                    form.sku = sku;
                }
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(price) = price {
                    form.price = price.to_string();
                }
                if let Some(stock) = stock {
                    form.stock = stock.to_string();
                }
            }
            let cmd = session.to_command()?;
            util::apply(inventory, cmd, global).await
        }

        ProductsCommand::Delete { id } => {
            let cmd = CoreCommand::delete(EntityKind::Product, EntityId::from(id));
            util::apply(inventory, cmd, global).await
        }
    }
}
