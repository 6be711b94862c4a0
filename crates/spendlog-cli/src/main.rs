//! spendlog CLI - Personal expense logger
//!
//! Usage:
//!   spendlog add 12.50 -c Food -d Lunch   Log an expense (date defaults to today)
//!   spendlog list                         List all expenses
//!   spendlog summary --month 2024-05      Totals per category for a month
//!   spendlog insights                     Category shares for this month

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_add(
                &db,
                &amount,
                category.as_deref(),
                description.as_deref(),
                date.as_deref(),
            )
        }
        Commands::List => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_list(&db)
        }
        Commands::Delete { id } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_delete(&db, id)
        }
        Commands::Summary { month } => {
            let db = commands::open_db(&cli.db)?;
            let month = commands::resolve_month(month.as_deref())?;
            commands::cmd_summary(&db, month)
        }
        Commands::Insights { month } => {
            let db = commands::open_db(&cli.db)?;
            let month = commands::resolve_month(month.as_deref())?;
            commands::cmd_insights(&db, month)
        }
        Commands::Export { format, output } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_export(&db, &format, output)
        }
        Commands::Clear { yes } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_clear(&db, yes)
        }
    }
}
