//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `expenses` - Expense commands (add, list, delete, clear)
//! - `export` - CSV/JSON export
//! - `reports` - Monthly summary and insights
//! - `setup` - Database setup (init) and shared utilities (open_db)

pub mod expenses;
pub mod export;
pub mod reports;
pub mod setup;

// Re-export command functions for main.rs
pub use expenses::*;
pub use export::*;
pub use reports::*;
pub use setup::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
