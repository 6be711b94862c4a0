//! Setup command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use spendlog_core::db::Database;
use tracing::debug;

/// Open the database, creating the schema if needed
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .with_context(|| format!("Database path is not valid UTF-8: {}", db_path.display()))?;
    debug!(path = path_str, "Opening database");
    Database::new(path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;
    let count = db.count_expenses()?;

    println!("✅ Database ready ({} expenses stored)", count);
    println!();
    println!("Next steps:");
    println!("  1. Log an expense: spendlog add 12.50 --category Food --description Lunch");
    println!("  2. See this month: spendlog summary");

    Ok(())
}
