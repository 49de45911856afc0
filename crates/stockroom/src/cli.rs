//! Clap derive structures for the `stockroom` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// stockroom -- manage products, suppliers, and purchase orders
#[derive(Debug, Parser)]
#[command(
    name = "stockroom",
    version,
    about = "Manage an inventory API from the command line",
    long_about = "Browse and edit the products, suppliers, and purchase orders\n\
        served by a stockroom inventory API.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config profile to use
    #[arg(long, short = 'p', env = "STOCKROOM_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API base URL (overrides profile)
    #[arg(long, short = 'u', env = "STOCKROOM_URL", global = true)]
    pub url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "STOCKROOM_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, env = "STOCKROOM_COLOR", default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', env = "STOCKROOM_YES", global = true)]
    pub yes: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "STOCKROOM_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "STOCKROOM_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage products
    #[command(alias = "p")]
    Products(ProductsArgs),

    /// Manage suppliers
    #[command(alias = "s")]
    Suppliers(SuppliersArgs),

    /// Manage purchase orders
    #[command(alias = "o")]
    Orders(OrdersArgs),

    /// Show totals and recent products and orders
    #[command(alias = "dash")]
    Dashboard,

    /// Check whether the API is reachable
    Status,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PRODUCTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List all products
    #[command(alias = "ls")]
    List,

    /// Get product details
    Get {
        /// Product ID
        id: String,
    },

    /// Create a product
    Create {
        #[arg(long)]
        sku: String,

        #[arg(long)]
        name: String,

        /// Unit price (e.g. 9.99)
        #[arg(long)]
        price: Decimal,

        /// Units in stock
        #[arg(long)]
        stock: i64,
    },

    /// Update a product; omitted fields keep their current value
    Update {
        /// Product ID
        id: String,

        #[arg(long)]
        sku: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        price: Option<Decimal>,

        #[arg(long)]
        stock: Option<i64>,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        /// Product ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SUPPLIERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SuppliersArgs {
    #[command(subcommand)]
    pub command: SuppliersCommand,
}

#[derive(Debug, Subcommand)]
pub enum SuppliersCommand {
    /// List all suppliers
    #[command(alias = "ls")]
    List,

    /// Get supplier details
    Get {
        /// Supplier ID
        id: String,
    },

    /// Create a supplier
    Create {
        #[arg(long)]
        name: String,

        /// Contact details (email, phone, ...)
        #[arg(long)]
        contact: String,
    },

    /// Update a supplier; omitted fields keep their current value
    Update {
        /// Supplier ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        contact: Option<String>,
    },

    /// Delete a supplier
    #[command(alias = "rm")]
    Delete {
        /// Supplier ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ORDERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: OrdersCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// List all orders
    #[command(alias = "ls")]
    List,

    /// Get a single order
    Get {
        /// Order ID
        id: String,
    },

    /// Show an order's supplier, contact, and line items
    #[command(alias = "show")]
    Details {
        /// Order ID
        id: String,
    },

    /// Create a purchase order
    Create {
        /// Supplier ID
        #[arg(long)]
        supplier: String,

        /// Line item as PRODUCT_ID:QTY (repeatable)
        #[arg(long = "item", value_name = "PRODUCT_ID:QTY", value_parser = parse_item)]
        items: Vec<ItemSpec>,

        #[arg(long, value_enum, default_value = "pending")]
        status: StatusArg,
    },

    /// Change an order's status
    Update {
        /// Order ID
        id: String,

        #[arg(long, value_enum)]
        status: StatusArg,
    },

    /// Delete an order
    #[command(alias = "rm")]
    Delete {
        /// Order ID
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Pending,
    Shipped,
    Delivered,
}

/// One `--item` value: the product and the raw quantity text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub product: String,
    pub quantity: String,
}

fn parse_item(raw: &str) -> Result<ItemSpec, String> {
    match raw.rsplit_once(':') {
        Some((product, quantity)) if !product.is_empty() => Ok(ItemSpec {
            product: product.to_owned(),
            quantity: quantity.to_owned(),
        }),
        _ => Err(format!("expected PRODUCT_ID:QTY, got '{raw}'")),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG / COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Set a value on the active profile
    Set {
        /// Profile key: url, ca_cert, insecure, timeout
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Print the config file location
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
