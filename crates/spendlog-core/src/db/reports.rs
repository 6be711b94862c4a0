//! Monthly spending reports

use std::collections::BTreeMap;

use rusqlite::params;
use rusqlite::types::Type;

use super::{Database, DbConn};
use crate::error::Result;
use crate::models::{Category, CategoryShare, MonthlySummary, ReportMonth};

impl Database {
    /// Total spending per category for one month
    ///
    /// Categories with no expenses in the month are left out rather than
    /// reported as zero.
    pub fn monthly_summary(&self, month: ReportMonth) -> Result<MonthlySummary> {
        let conn = self.conn()?;
        let rows = Self::category_totals(&conn, month)?;

        let mut totals = BTreeMap::new();
        let mut total = 0.0;
        for (category, amount, _) in rows {
            total += amount;
            totals.insert(category, amount);
        }

        Ok(MonthlySummary {
            month,
            totals,
            total,
        })
    }

    /// Each category's share of one month's spending, largest first
    pub fn monthly_breakdown(&self, month: ReportMonth) -> Result<Vec<CategoryShare>> {
        let conn = self.conn()?;
        let rows = Self::category_totals(&conn, month)?;

        let total: f64 = rows.iter().map(|(_, amount, _)| amount).sum();

        let mut shares: Vec<CategoryShare> = rows
            .into_iter()
            .map(|(category, amount, expense_count)| CategoryShare {
                category,
                amount,
                percentage: if total > 0.0 {
                    (amount / total) * 100.0
                } else {
                    0.0
                },
                expense_count,
            })
            .collect();

        shares.sort_by(|a, b| {
            b.amount
                .total_cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });

        Ok(shares)
    }

    /// Helper: `(category, SUM(amount), COUNT(*))` for expenses dated inside `month`
    fn category_totals(conn: &DbConn, month: ReportMonth) -> Result<Vec<(Category, f64, i64)>> {
        let mut stmt = conn.prepare(
            r#"
            SELECT category, SUM(amount), COUNT(*)
            FROM expenses
            WHERE date BETWEEN ?1 AND ?2
            GROUP BY category
            "#,
        )?;

        let rows = stmt
            .query_map(
                params![month.first_day().to_string(), month.last_day().to_string()],
                |row| {
                    let category_str: String = row.get(0)?;
                    let category: Category = category_str.parse().map_err(|e: String| {
                        rusqlite::Error::FromSqlConversionFailure(0, Type::Text, e.into())
                    })?;
                    Ok((category, row.get(1)?, row.get(2)?))
                },
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }
}
