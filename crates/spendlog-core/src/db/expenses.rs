//! Expense operations

use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::{Category, Expense, NewExpense};

const EXPENSE_COLUMNS: &str = "id, amount, category, description, date, created_at";

impl Database {
    /// Insert an expense, returning its new ID
    ///
    /// Rejects non-positive or non-finite amounts without touching the table.
    pub fn insert_expense(&self, expense: &NewExpense) -> Result<i64> {
        expense.validate()?;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO expenses (amount, category, description, date) VALUES (?, ?, ?, ?)",
            params![
                expense.amount,
                expense.category.as_str(),
                expense.description,
                expense.date.to_string(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, amount = expense.amount, category = %expense.category, "Inserted expense");
        Ok(id)
    }

    /// Delete an expense by ID
    ///
    /// Returns `false` if no expense had that ID.
    pub fn delete_expense(&self, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let removed = conn.execute("DELETE FROM expenses WHERE id = ?", params![id])?;
        debug!(id, removed, "Delete expense");
        Ok(removed > 0)
    }

    /// List every expense in insertion order
    pub fn list_expenses(&self) -> Result<Vec<Expense>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM expenses ORDER BY id",
            EXPENSE_COLUMNS
        ))?;

        let expenses = stmt
            .query_map([], |row| Self::row_to_expense(row))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(expenses)
    }

    /// Get a single expense by ID
    pub fn get_expense(&self, id: i64) -> Result<Option<Expense>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM expenses WHERE id = ?",
            EXPENSE_COLUMNS
        ))?;

        let expense = stmt
            .query_row(params![id], |row| Self::row_to_expense(row))
            .optional()?;

        Ok(expense)
    }

    /// Count stored expenses
    pub fn count_expenses(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count)
    }

    pub(crate) fn row_to_expense(row: &rusqlite::Row) -> rusqlite::Result<Expense> {
        let category_str: String = row.get(2)?;
        let date_str: String = row.get(4)?;
        let created_at_str: Option<String> = row.get(5)?;

        let category: Category = category_str
            .parse()
            .map_err(|e: String| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, e.into()))?;
        let date = chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

        Ok(Expense {
            id: row.get(0)?,
            amount: row.get(1)?,
            category,
            description: row.get(3)?,
            date,
            created_at: created_at_str.as_deref().and_then(parse_datetime),
        })
    }
}
