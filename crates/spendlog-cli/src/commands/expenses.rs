//! Expense command implementations

use std::io::{self, Write};

use anyhow::Result;
use spendlog_core::db::Database;
use spendlog_core::models::{parse_amount, parse_date, Category, Expense, NewExpense};

use super::truncate;

/// Validate user input and log a new expense
///
/// Nothing is written unless every field is valid.
pub fn cmd_add(
    db: &Database,
    amount: &str,
    category: Option<&str>,
    description: Option<&str>,
    date: Option<&str>,
) -> Result<()> {
    let amount = parse_amount(amount)?;
    let category: Category = match category {
        Some(name) => name.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => Category::default(),
    };
    let date = parse_date(date)?;
    let description = description.map(str::trim).unwrap_or_default();

    let expense = NewExpense::new(amount, category, description, date);
    let id = db.insert_expense(&expense)?;

    println!("✅ Expense added successfully!");
    println!(
        "   [{}] {} │ ${:.2} │ {} │ {}",
        id,
        expense.date,
        expense.amount,
        expense.category,
        truncate(&expense.description, 40)
    );

    Ok(())
}

pub fn cmd_list(db: &Database) -> Result<()> {
    let expenses = db.list_expenses()?;
    print!("{}", render_expense_list(&expenses));
    Ok(())
}

/// Format expenses as a table, or a hint when there are none
pub fn render_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses logged yet. Add one with:\n  \
                spendlog add 12.50 --category Food --description Lunch\n"
            .to_string();
    }

    let mut out = String::new();
    out.push('\n');
    out.push_str("📝 Expenses\n");
    out.push_str(&format!(
        "   {:>5} │ {:10} │ {:>10} │ {:13} │ Description\n",
        "ID", "Date", "Amount", "Category"
    ));
    out.push_str("   ──────┼────────────┼────────────┼───────────────┼──────────────────────\n");

    for expense in expenses {
        out.push_str(&format!(
            "   {:>5} │ {} │ {:>10.2} │ {:13} │ {}\n",
            expense.id,
            expense.date,
            expense.amount,
            expense.category.as_str(),
            truncate(&expense.description, 40)
        ));
    }
    out
}

/// Delete an expense; a missing ID is a warning, not an error
pub fn cmd_delete(db: &Database, id: i64) -> Result<()> {
    let Some(expense) = db.get_expense(id)? else {
        println!("⚠️  Expense {} not found. Nothing was deleted.", id);
        println!("   Use 'spendlog list' to see expense IDs.");
        return Ok(());
    };

    if !db.delete_expense(id)? {
        println!("⚠️  Expense {} not found. Nothing was deleted.", id);
        return Ok(());
    }

    println!("🗑️  Deleted expense {}:", id);
    println!(
        "   {} │ ${:.2} │ {} │ {}",
        expense.date,
        expense.amount,
        expense.category,
        truncate(&expense.description, 40)
    );

    Ok(())
}

/// Delete every expense, asking first unless `yes` is set
pub fn cmd_clear(db: &Database, yes: bool) -> Result<()> {
    let count = db.count_expenses()?;
    if count == 0 {
        println!("No expenses to clear.");
        return Ok(());
    }

    if !yes {
        print!("⚠️  This will permanently delete all {} expenses.\n\n", count);
        print!("Are you sure? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let removed = db.clear_expenses()?;
    println!("✅ Cleared {} expenses.", removed);

    Ok(())
}
