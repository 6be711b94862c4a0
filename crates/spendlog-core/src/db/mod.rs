//! Database access layer with connection pooling and migrations
//!
//! This module is organized by domain:
//! - `expenses` - Expense CRUD
//! - `reports` - Monthly category summaries

use std::sync::Arc;

use chrono::{DateTime, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::{debug, info};

use crate::error::Result;

mod expenses;
mod reports;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Parse a SQLite datetime string into a DateTime<Utc>
pub(crate) fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    // SQLite stores as "YYYY-MM-DD HH:MM:SS" format
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .ok()
}

/// Database wrapper with connection pooling
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    /// Path to the database file
    db_path: String,
    /// Scratch directory owning a throwaway database; removed on last drop.
    /// Declared after `pool` so connections close first.
    _scratch: Option<Arc<tempfile::TempDir>>,
}

impl Database {
    /// Open (or create) the database at `path` and make sure the schema exists
    pub fn new(path: &str) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(4).build(manager)?;

        let db = Self {
            pool,
            db_path: path.to_string(),
            _scratch: None,
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create a throwaway database (for testing)
    ///
    /// Note: Uses a temporary file rather than `:memory:` because every pooled
    /// connection to `:memory:` would see its own empty database.
    pub fn in_memory() -> Result<Self> {
        let scratch = tempfile::Builder::new().prefix("spendlog_test_").tempdir()?;
        let path = scratch.path().join("expenses.db");

        let mut db = Self::new(&path.to_string_lossy())?;
        db._scratch = Some(Arc::new(scratch));
        Ok(db)
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Run database migrations
    ///
    /// Every statement is `IF NOT EXISTS`, so this is safe on each startup.
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- WAL mode: readers don't block the writer
            -- Note: creates -wal and -shm sidecar files alongside the database
            PRAGMA journal_mode = WAL;

            PRAGMA synchronous = NORMAL;

            -- AUTOINCREMENT keeps ids monotonic even after the newest row is deleted
            CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL CHECK (amount > 0),
                category TEXT NOT NULL
                    CHECK (category IN ('Food', 'Transport', 'Shopping', 'Entertainment', 'Other')),
                description TEXT NOT NULL DEFAULT '',
                date DATE NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
            "#,
        )?;

        debug!(path = %self.db_path, "Migrations complete");
        Ok(())
    }

    /// Delete every expense. Irreversible.
    ///
    /// Returns the number of rows removed.
    pub fn clear_expenses(&self) -> Result<usize> {
        let conn = self.conn()?;
        let removed = conn.execute("DELETE FROM expenses", [])?;
        info!(removed, "Cleared all expenses");
        Ok(removed)
    }
}

mod tests;
