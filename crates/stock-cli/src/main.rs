//! dlc-stock - command-line client for the DLC stock API
//!
//! Same core as the web front-end: validation, urgency and disposal
//! semantics come from `stock-core`.

mod cli;
mod http;
mod render;

use anyhow::{bail, Result};
use chrono::Local;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use stock_core::{expiring_within, load_references, sort_for_display, ApiConfig, Session, StockApi};

use crate::cli::{Cli, Commands};
use crate::http::HttpApi;

#[tokio::main]
async fn main() -> Result<()> {
    // Quiet by default so command output stays readable; RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = HttpApi::new(ApiConfig::new(&cli.api_base));
    debug!(base = api.config().base_url(), "using stock API");
    let now = Local::now().naive_local();

    match cli.command {
        Commands::Add(args) => {
            let mut session = Session::new(&api);
            session.state_mut().draft = args.draft();
            let created = session.submit().await?;
            println!("Item #{} added: {} (DLC {})", created.id, created.name, created.dlc);
        }
        Commands::List => {
            let mut items = api.list_items().await?;
            sort_for_display(&mut items);
            print!("{}", render::item_table(&items, now));
        }
        Commands::Check { days } => {
            let items = api.list_items().await?;
            let soon = expiring_within(&items, now.date(), days);
            print!("{}", render::expiring_report(&soon, days));
        }
        Commands::Dispose { id, outcome } => {
            let mut session = Session::new(&api);
            if !session.dispose(id, outcome).await? {
                bail!("item #{} is already being disposed", id);
            }
            println!("Item #{}: {}", id, outcome.success_message());
        }
        Commands::Refs => {
            let refs = load_references(&api).await?;
            print!("{}", render::references(&refs));
        }
        Commands::Health => {
            let report = api.health().await?;
            println!("API: {}", api.config().base_url());
            println!("Database: {}", report.db_path);
            if !report.db_exists {
                bail!("database file does not exist on the server");
            }
            println!("Database present: yes");
        }
    }

    Ok(())
}
