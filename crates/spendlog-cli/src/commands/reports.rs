//! Report command implementations

use anyhow::{Context, Result};
use spendlog_core::db::Database;
use spendlog_core::models::{CategoryShare, MonthlySummary, ReportMonth};

/// Width of the longest insights bar, in characters
const BAR_WIDTH: usize = 30;

const RULE: &str = "   ─────────────────────────────\n";

/// Resolve an optional `YYYY-MM` argument, defaulting to the current month
pub fn resolve_month(month: Option<&str>) -> Result<ReportMonth> {
    match month {
        Some(text) => text
            .parse::<ReportMonth>()
            .context("Invalid --month (use YYYY-MM)"),
        None => Ok(ReportMonth::current()),
    }
}

pub fn cmd_summary(db: &Database, month: ReportMonth) -> Result<()> {
    let summary = db.monthly_summary(month)?;
    print!("{}", render_summary(&summary));
    Ok(())
}

pub fn cmd_insights(db: &Database, month: ReportMonth) -> Result<()> {
    let shares = db.monthly_breakdown(month)?;
    print!("{}", render_insights(month, &shares));
    Ok(())
}

/// Format a monthly summary as `Category: $X.XX` lines plus a total
pub fn render_summary(summary: &MonthlySummary) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("📊 Monthly Summary ({})\n", summary.month));
    out.push_str(RULE);

    if summary.is_empty() {
        out.push_str("   No spending found in this month.\n");
        return out;
    }

    for (category, total) in &summary.totals {
        out.push_str(&format!("   {}: ${:.2}\n", category, total));
    }
    out.push_str(RULE);
    out.push_str(&format!("   Total: ${:.2}\n", summary.total));
    out
}

/// Format category shares as a table with a proportional bar per row
pub fn render_insights(month: ReportMonth, shares: &[CategoryShare]) -> String {
    if shares.is_empty() {
        return "No expense data available for insights.\n".to_string();
    }

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("💡 Spending Insights ({})\n", month));
    out.push_str(&format!(
        "   {:13} │ {:>10} │ {:>6} │ {:>5} │\n",
        "Category", "Amount", "%", "Count"
    ));
    out.push_str(
        "   ──────────────┼────────────┼────────┼───────┼───────────────────────────────\n",
    );

    for share in shares {
        out.push_str(&format!(
            "   {:13} │ {:>10.2} │ {:>5.1}% │ {:>5} │ {}\n",
            share.category.as_str(),
            share.amount,
            share.percentage,
            share.expense_count,
            bar(share.percentage)
        ));
    }
    out
}

/// Proportional bar for a percentage; any non-zero share gets at least one block
pub(crate) fn bar(percentage: f64) -> String {
    let filled = ((percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = if percentage > 0.0 { filled.max(1) } else { 0 };
    "█".repeat(filled.min(BAR_WIDTH))
}
