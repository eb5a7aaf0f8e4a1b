//! Command-line interface definition

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};

use stock_core::{DisposalOutcome, DraftItem, DEFAULT_API_BASE};

#[derive(Parser, Debug)]
#[command(name = "dlc-stock")]
#[command(about = "Track perishable stock by expiry date (DLC)", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the stock API
    #[arg(long, env = "DLC_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all items with their urgency
    List,

    /// Show perishable items expiring in the next N days
    Check {
        #[arg(long, default_value_t = 7)]
        days: u32,
    },

    /// Register a new item
    Add(AddArgs),

    /// Remove an item from the stock
    Dispose {
        id: u32,

        /// consumed | lost
        #[arg(long, value_parser = parse_outcome)]
        outcome: DisposalOutcome,
    },

    /// Show the category and location vocabularies
    Refs,

    /// Check that the API is reachable
    Health,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub category: String,

    /// Expiry date, YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    pub dlc: NaiveDate,

    #[arg(long)]
    pub location: String,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub perishable: bool,
}

impl AddArgs {
    pub fn draft(&self) -> DraftItem {
        DraftItem {
            name: self.name.clone(),
            category: self.category.clone(),
            perishable: self.perishable,
            dlc: Some(self.dlc),
            location: self.location.clone(),
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("'{}' is not a YYYY-MM-DD date (e.g. 2025-10-31)", s))
}

fn parse_outcome(s: &str) -> Result<DisposalOutcome, String> {
    DisposalOutcome::parse(s).ok_or_else(|| format!("'{}' is not one of: consumed, lost", s))
}
