//! spendlog Core Library
//!
//! Shared functionality for the spendlog expense tracker:
//! - SQLite-backed expense store with migrations
//! - Monthly per-category summaries and breakdowns
//! - CSV/JSON export

pub mod db;
pub mod error;
pub mod export;
pub mod models;

pub use db::Database;
pub use error::{Error, Result};
pub use export::ExportFormat;
pub use models::{
    parse_amount, parse_date, Category, CategoryShare, Expense, MonthlySummary, NewExpense,
    ReportMonth,
};
