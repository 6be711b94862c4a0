//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// spendlog - Log everyday spending and see where it goes
#[derive(Parser)]
#[command(name = "spendlog")]
#[command(about = "Personal expense logger with monthly summaries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "expenses.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Log a new expense
    Add {
        /// Amount spent (positive, e.g. 12.50)
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Category: Food, Transport, Shopping, Entertainment, Other
        #[arg(short, long)]
        category: Option<String>,

        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// List all expenses
    List,

    /// Delete an expense by ID
    Delete {
        /// Expense ID (see `spendlog list`)
        id: i64,
    },

    /// Show totals per category for a month
    Summary {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },

    /// Show each category's share of a month's spending
    Insights {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },

    /// Export all expenses
    Export {
        /// Output format: csv, json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete every expense
    Clear {
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
