//! Domain models for spendlog

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Spending category
///
/// The set is closed; anything else is rejected at parse time and by the
/// `CHECK` constraint on the `expenses` table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Category {
    #[default]
    Food,
    Transport,
    Shopping,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Food,
        Self::Transport,
        Self::Shopping,
        Self::Entertainment,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "shopping" => Ok(Self::Shopping),
            "entertainment" => Ok(Self::Entertainment),
            "other" => Ok(Self::Other),
            _ => Err(format!(
                "Unknown category: {}. Available: Food, Transport, Shopping, Entertainment, Other",
                s
            )),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: f64,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
    #[serde(skip)]
    pub created_at: Option<DateTime<Utc>>,
}

/// An expense ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub amount: f64,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
}

impl NewExpense {
    /// Build a new expense, defaulting the date to today (local time)
    pub fn new(
        amount: f64,
        category: Category,
        description: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            amount,
            category,
            description: description.into(),
            date: date.unwrap_or_else(|| Local::now().date_naive()),
        }
    }

    /// Check the invariants the store relies on
    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() {
            return Err(Error::InvalidData("Invalid amount".to_string()));
        }
        if self.amount <= 0.0 {
            return Err(Error::InvalidData("Amount must be positive".to_string()));
        }
        Ok(())
    }
}

/// Parse user-entered amount text
///
/// Accepts plain decimal numbers only: digits with at most one decimal point.
pub fn parse_amount(input: &str) -> Result<f64> {
    let text = input.trim();
    let well_formed = !text.is_empty()
        && text.chars().filter(|c| *c == '.').count() <= 1
        && text.chars().any(|c| c.is_ascii_digit())
        && text.chars().all(|c| c.is_ascii_digit() || c == '.');

    if !well_formed {
        // Keep "must be positive" for explicit negatives like "-5"
        if let Ok(value) = text.parse::<f64>() {
            if value.is_finite() && value <= 0.0 {
                return Err(Error::InvalidData("Amount must be positive".to_string()));
            }
        }
        return Err(Error::InvalidData("Invalid amount".to_string()));
    }

    let amount: f64 = text
        .parse()
        .map_err(|_| Error::InvalidData("Invalid amount".to_string()))?;
    // A long enough run of digits overflows to infinity
    if !amount.is_finite() {
        return Err(Error::InvalidData("Invalid amount".to_string()));
    }
    if amount <= 0.0 {
        return Err(Error::InvalidData("Amount must be positive".to_string()));
    }
    Ok(amount)
}

/// Parse user-entered date text; blank means "use today"
pub fn parse_date(input: Option<&str>) -> Result<Option<NaiveDate>> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| Error::InvalidData(format!("Invalid date: {} (use YYYY-MM-DD)", text))),
    }
}

/// A calendar month used to scope reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportMonth {
    year: i32,
    month: u32,
}

impl ReportMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(Error::InvalidData(format!(
                "Invalid month: {}-{:02}",
                year, month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn last_day(&self) -> NaiveDate {
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next.and_then(|d| d.pred_opt()).unwrap_or_default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::str::FromStr for ReportMonth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidData(format!("Invalid month: {} (use YYYY-MM)", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl std::fmt::Display for ReportMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Totals per category for one month
///
/// Categories with no expenses in the month are absent from `totals`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: ReportMonth,
    pub totals: BTreeMap<Category, f64>,
    pub total: f64,
}

impl MonthlySummary {
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// One category's slice of a month's spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: f64,
    pub percentage: f64,
    pub expense_count: i64,
}
