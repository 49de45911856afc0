//! Dashboard command: totals plus the first few products and orders.

use chrono::Utc;

use stockroom_core::{Dashboard, Inventory};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

fn preview(title: &str, lines: &[String]) -> String {
    let mut out = format!("{title}:");
    if lines.is_empty() {
        out.push_str("\n  (none)");
    }
    for line in lines {
        out.push_str("\n  ");
        out.push_str(line);
    }
    out
}

fn dashboard_text(d: &Dashboard) -> String {
    let totals = output::detail_lines(&[
        ("Total Products", d.total_products.to_string()),
        ("Total Suppliers", d.total_suppliers.to_string()),
        ("Total Orders", d.total_orders.to_string()),
        ("Pending Orders", d.pending_orders.to_string()),
    ]);
    format!(
        "{totals}\n\n{}\n\n{}",
        preview("Recent Products", &d.recent_products),
        preview("Recent Orders", &d.recent_orders),
    )
}

pub async fn handle(inventory: &Inventory, global: &GlobalOpts) -> Result<(), CliError> {
    let (products, suppliers, orders) = tokio::try_join!(
        inventory.fetch_products(),
        inventory.fetch_suppliers(),
        inventory.fetch_orders()
    )?;
    let dashboard = Dashboard::build(&products, &suppliers, &orders, Utc::now());

    let out = output::render_single(&global.output, &dashboard, dashboard_text, |d| {
        d.total_products.to_string()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
