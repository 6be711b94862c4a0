//! Export of the expense list as CSV or JSON

use serde::Serialize;

use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::Expense;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(Error::InvalidData(format!(
                "Unknown export format: {}. Available: csv, json",
                s
            ))),
        }
    }
}

/// Flat CSV row; amounts are written with two decimals
#[derive(Debug, Serialize)]
struct ExpenseRow<'a> {
    id: i64,
    date: String,
    amount: String,
    category: &'a str,
    description: &'a str,
}

impl<'a> From<&'a Expense> for ExpenseRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id,
            date: expense.date.to_string(),
            amount: format!("{:.2}", expense.amount),
            category: expense.category.as_str(),
            description: &expense.description,
        }
    }
}

impl Database {
    /// Export every expense in the requested format
    pub fn export_expenses(&self, format: ExportFormat) -> Result<String> {
        let expenses = self.list_expenses()?;
        match format {
            ExportFormat::Csv => expenses_to_csv(&expenses),
            ExportFormat::Json => Ok(serde_json::to_string_pretty(&expenses)?),
        }
    }
}

fn expenses_to_csv(expenses: &[Expense]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if expenses.is_empty() {
        writer.write_record(["id", "date", "amount", "category", "description"])?;
    }
    for expense in expenses {
        writer.serialize(ExpenseRow::from(expense))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidData(e.to_string()))
}
