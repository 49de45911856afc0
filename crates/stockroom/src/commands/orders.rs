//! Order command handlers.
//!
//! `orders create` runs its `--item` values through the same
//! `OrderComposer` the TUI form uses, so validation and captured prices
//! behave identically in both front-ends.

use std::sync::Arc;

use tabled::Tabled;

use stockroom_core::view::list::empty_placeholder;
use stockroom_core::{
    Command as CoreCommand, CoreError, EditSession, EntityId, EntityKind, Inventory, Order,
    OrderComposer, OrderDetails, OrderRow, OrderStatus, ProductOption,
};

use crate::cli::{GlobalOpts, ItemSpec, OrdersArgs, OrdersCommand, StatusArg};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct OrderTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Supplier")]
    supplier: String,
    #[tabled(rename = "Items")]
    items: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Order> for OrderTableRow {
    fn from(o: &Order) -> Self {
        let row = OrderRow::from(o);
        Self {
            id: row.id.into_inner(),
            supplier: row.supplier,
            items: row.items,
            status: row.status_label,
        }
    }
}

impl From<StatusArg> for OrderStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => Self::Pending,
            StatusArg::Shipped => Self::Shipped,
            StatusArg::Delivered => Self::Delivered,
        }
    }
}

fn details_text(d: &OrderDetails) -> String {
    let mut out = output::detail_lines(&[
        ("Order", d.id.to_string()),
        ("Supplier", d.supplier.clone()),
        ("Contact", d.contact.clone()),
        ("Status", d.status.clone()),
    ]);
    out.push_str("\n\nItems:");
    for line in d.item_lines() {
        out.push_str("\n  ");
        out.push_str(line);
    }
    out.push_str(&format!("\n\nTotal Items: {}", d.total_items));
    out
}

/// Fill a composer from `--item` values against the current products.
fn compose(
    products: Arc<Vec<ProductOption>>,
    supplier: String,
    items: Vec<ItemSpec>,
    status: StatusArg,
) -> Result<OrderComposer, CliError> {
    let mut composer = OrderComposer::new();
    composer.populate_products(products);
    composer.set_supplier(Some(EntityId::from(supplier)));
    composer.set_status(status.into());

    for (index, item) in items.into_iter().enumerate() {
        let row = match composer.rows().first() {
            Some(first) if index == 0 => first.id,
            _ => composer.add_row(),
        };
        if !composer.select_product(row, Some(EntityId::from(item.product.as_str()))) {
            return Err(CliError::NotFound {
                resource_type: "product".into(),
                identifier: item.product,
                list_command: "products list".into(),
            });
        }
        composer.set_quantity(row, item.quantity);
    }
    Ok(composer)
}

pub async fn handle(
    inventory: &Inventory,
    args: OrdersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        OrdersCommand::List => {
            let orders = inventory.fetch_orders().await?;
            let out = output::render_list(
                &global.output,
                &orders,
                &empty_placeholder(EntityKind::Order),
                |o| OrderTableRow::from(o),
                |o| o.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OrdersCommand::Get { id } => {
            let order = inventory.get_order(&EntityId::from(id)).await?;
            let out = output::render_single(
                &global.output,
                &order,
                |o| details_text(&OrderDetails::from(o)),
                |o| o.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OrdersCommand::Details { id } => {
            let details = inventory.order_details(&EntityId::from(id)).await?;
            let out = output::render_single(&global.output, &details, details_text, |d| {
                d.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OrdersCommand::Create {
            supplier,
            items,
            status,
        } => {
            if items.is_empty() {
                return Err(CoreError::NoItems.into());
            }
            let products: Vec<ProductOption> = inventory
                .fetch_products()
                .await?
                .iter()
                .map(ProductOption::from)
                .collect();
            let composer = compose(Arc::new(products), supplier, items, status)?;
            let request = composer.submit()?;
            util::apply(inventory, CoreCommand::CreateOrder(request), global).await
        }

        OrdersCommand::Update { id, status } => {
            let mut session = inventory
                .open_edit(EntityKind::Order, &EntityId::from(id))
                .await?;
            if let EditSession::Order { status: current, .. } = &mut session {
                *current = status.into();
            }
            let cmd = session.to_command()?;
            util::apply(inventory, cmd, global).await
        }

        OrdersCommand::Delete { id } => {
            let cmd = CoreCommand::delete(EntityKind::Order, EntityId::from(id));
            util::apply(inventory, cmd, global).await
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn options() -> Arc<Vec<ProductOption>> {
        Arc::new(vec![
            ProductOption {
                id: "p1".into(),
                label: "A1 - Widget ($9.99)".into(),
                price: Some(Decimal::new(999, 2)),
            },
            ProductOption {
                id: "p2".into(),
                label: "B2 - Gadget ($4.5)".into(),
                price: Some(Decimal::new(45, 1)),
            },
        ])
    }

    fn item(product: &str, quantity: &str) -> ItemSpec {
        ItemSpec {
            product: product.into(),
            quantity: quantity.into(),
        }
    }

    #[test]
    fn items_become_composer_rows() {
        let composer = compose(
            options(),
            "s1".into(),
            vec![item("p1", "2"), item("p2", "1")],
            StatusArg::Shipped,
        )
        .unwrap();
        let request = composer.submit().unwrap();

        assert_eq!(request.items.len(), 2);
        assert_eq!(request.status, OrderStatus::Shipped);
        assert_eq!(request.items[0].qty, Some(2));
        assert_eq!(request.items[1].price, Some(Decimal::new(45, 1)));
    }

    #[test]
    fn unknown_product_is_not_found() {
        let err = compose(options(), "s1".into(), vec![item("p9", "1")], StatusArg::Pending)
            .err()
            .unwrap();
        assert!(matches!(err, CliError::NotFound { .. }));
    }

    #[test]
    fn no_items_fails_at_submit() {
        let composer = compose(options(), "s1".into(), Vec::new(), StatusArg::Pending).unwrap();
        assert!(matches!(
            composer.submit(),
            Err(CoreError::NoItems)
        ));
    }

    #[test]
    fn details_text_lists_items() {
        let details = OrderDetails {
            id: "o1".into(),
            supplier: "Acme".into(),
            contact: "ops@acme.test".into(),
            status: "pending".into(),
            lines: vec!["A1: Widget - Qty: 2, Price: $9.99".into()],
            total_items: 1,
        };
        let text = details_text(&details);
        assert!(text.contains("  A1: Widget - Qty: 2, Price: $9.99"));
        assert!(text.ends_with("Total Items: 1"));
    }
}
