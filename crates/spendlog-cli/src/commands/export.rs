//! Export command implementation

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use spendlog_core::db::Database;
use spendlog_core::ExportFormat;

pub fn cmd_export(db: &Database, format: &str, output: Option<PathBuf>) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let data = db.export_expenses(format)?;

    match output {
        Some(path) => {
            let mut file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            file.write_all(data.as_bytes())?;

            let count = db.count_expenses()?;
            println!("✅ Exported {} expenses to {}", count, path.display());
        }
        None => {
            // Write to stdout
            print!("{}", data);
        }
    }

    Ok(())
}
