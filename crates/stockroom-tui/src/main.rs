//! `stockroom-tui`: terminal front-end for a stockroom inventory API.
//!
//! Built on [ratatui](https://ratatui.rs) with reactive views from
//! `stockroom-core`'s [`ViewStream`](stockroom_core::ViewStream). Screens
//! are navigable via number keys (1-5): Dashboard, Products, Suppliers,
//! Orders, and Create.
//!
//! Logs are written to a file (default: the platform data dir) so they
//! never corrupt the terminal. A background data bridge forwards every
//! published view into the TUI action loop.

mod action;
mod app;
mod component;
mod data_bridge;
mod dialog;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use stockroom_config::Config;
use stockroom_core::{ApiConfig, Inventory, TlsVerification};

use crate::app::App;

const LOG_FILE_NAME: &str = "stockroom-tui.log";

/// Terminal UI for managing products, suppliers, and purchase orders.
#[derive(Parser, Debug)]
#[command(name = "stockroom-tui", version, about)]
struct Cli {
    /// Config profile to use
    #[arg(short = 'p', long, env = "STOCKROOM_PROFILE")]
    profile: Option<String>,

    /// Inventory API base URL (overrides the profile)
    #[arg(short = 'u', long, env = "STOCKROOM_URL")]
    url: Option<String>,

    /// Accept self-signed TLS certificates
    #[arg(short = 'k', long, env = "STOCKROOM_INSECURE")]
    insecure: bool,

    /// Log file path (defaults to the platform data dir)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-based tracing; stdout belongs to the terminal UI. The returned
/// guard must live until exit so buffered lines get flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "stockroom_tui={log_level},stockroom_core={log_level},stockroom_api={log_level}"
        ))
    });

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| stockroom_config::data_dir().join(LOG_FILE_NAME));
    let log_dir = log_file
        .parent()
        .map_or_else(std::env::temp_dir, Path::to_path_buf);
    let _ = std::fs::create_dir_all(&log_dir);
    let log_filename = log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new(LOG_FILE_NAME));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Resolve the API endpoint: `--url` > profile > built-in default
/// (`http://localhost:5000/api`).
fn resolve_api_config(cli: &Cli, cfg: &Config) -> Result<ApiConfig> {
    let profile = cfg
        .resolve_profile(cli.profile.as_deref())
        .wrap_err("cannot select config profile")?
        .map(|(_, p)| p.clone())
        .unwrap_or_default();

    let mut config = stockroom_config::profile_to_api_config(&profile, &cfg.defaults)
        .wrap_err("invalid profile")?;

    if let Some(raw) = cli.url.as_deref() {
        config.url = stockroom_config::parse_url(raw).wrap_err("invalid --url")?;
    }
    if cli.insecure {
        config.tls = TlsVerification::DangerAcceptInvalid;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks go in before the terminal switches modes
    tui::install_hooks()?;

    let _log_guard = setup_tracing(&cli);

    let cfg = stockroom_config::load_config_or_default();
    let api_config = resolve_api_config(&cli, &cfg)?;
    info!(url = %api_config.url, "starting stockroom-tui");

    let inventory = Inventory::new(&api_config).wrap_err("cannot build API client")?;
    let mut app = App::new(inventory);
    app.run().await?;

    Ok(())
}
