//! Database tests

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rusqlite::params;

    use crate::db::Database;
    use crate::error::Error;
    use crate::models::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn add(db: &Database, amount: f64, category: Category, on: Option<NaiveDate>) -> i64 {
        db.insert_expense(&NewExpense::new(amount, category, "", on))
            .unwrap()
    }

    #[test]
    fn test_in_memory_db() {
        let db = Database::in_memory().unwrap();
        assert!(db.list_expenses().unwrap().is_empty());
        assert_eq!(db.count_expenses().unwrap(), 0);
    }

    #[test]
    fn test_in_memory_db_removed_on_drop() {
        let db = Database::in_memory().unwrap();
        add(&db, 1.0, Category::Food, date(2024, 5, 1));
        let path = std::path::PathBuf::from(db.path());
        assert!(path.exists());

        // Clones share the scratch directory
        let clone = db.clone();
        drop(db);
        assert!(path.exists());
        assert_eq!(clone.count_expenses().unwrap(), 1);

        drop(clone);
        assert!(!path.exists());
        assert!(!path.parent().unwrap().exists());
    }

    #[test]
    fn test_expenses_schema_exists() {
        let db = Database::in_memory().unwrap();
        let conn = db.conn().unwrap();

        let result: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('expenses') WHERE name IN ('id', 'amount', 'category', 'description', 'date', 'created_at')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(result, 6, "expenses table should have 6 expected columns");
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let db = Database::in_memory().unwrap();
        let id = add(&db, 4.0, Category::Food, date(2024, 5, 1));

        // Reopening runs the migrations again against the same file
        let reopened = Database::new(db.path()).unwrap();
        let expenses = reopened.list_expenses().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].id, id);
    }

    #[test]
    fn test_insert_and_list() {
        let db = Database::in_memory().unwrap();

        let id = db
            .insert_expense(&NewExpense::new(
                12.34,
                Category::Shopping,
                "Socks",
                date(2024, 5, 17),
            ))
            .unwrap();
        assert!(id > 0);

        let expenses = db.list_expenses().unwrap();
        assert_eq!(expenses.len(), 1);
        let expense = &expenses[0];
        assert_eq!(expense.id, id);
        assert_eq!(expense.amount, 12.34);
        assert_eq!(expense.category, Category::Shopping);
        assert_eq!(expense.description, "Socks");
        assert_eq!(expense.date, date(2024, 5, 17).unwrap());
        assert!(expense.created_at.is_some());
    }

    #[test]
    fn test_insert_assigns_unique_ids_in_order() {
        let db = Database::in_memory().unwrap();
        let first = add(&db, 1.0, Category::Food, date(2024, 1, 1));
        let second = add(&db, 2.0, Category::Food, date(2023, 1, 1));
        assert!(second > first);

        let ids: Vec<i64> = db.list_expenses().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let db = Database::in_memory().unwrap();
        let first = add(&db, 1.0, Category::Food, date(2024, 1, 1));
        assert!(db.delete_expense(first).unwrap());

        let second = add(&db, 1.0, Category::Food, date(2024, 1, 1));
        assert!(second > first);
    }

    #[test]
    fn test_insert_rejects_non_positive_amount() {
        let db = Database::in_memory().unwrap();

        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = db.insert_expense(&NewExpense::new(
                amount,
                Category::Food,
                "bad",
                date(2024, 5, 1),
            ));
            assert!(matches!(result, Err(Error::InvalidData(_))), "amount {}", amount);
        }

        assert_eq!(db.count_expenses().unwrap(), 0);
    }

    #[test]
    fn test_table_constraints() {
        let db = Database::in_memory().unwrap();
        let conn = db.conn().unwrap();

        let bad_amount = conn.execute(
            "INSERT INTO expenses (amount, category, description, date) VALUES (?, ?, ?, ?)",
            params![-1.0, "Food", "", "2024-05-01"],
        );
        assert!(bad_amount.is_err());

        let bad_category = conn.execute(
            "INSERT INTO expenses (amount, category, description, date) VALUES (?, ?, ?, ?)",
            params![1.0, "Groceries", "", "2024-05-01"],
        );
        assert!(bad_category.is_err());
    }

    #[test]
    fn test_insert_defaults_date_to_today() {
        let db = Database::in_memory().unwrap();
        let id = add(&db, 9.99, Category::Other, None);

        let expense = db.get_expense(id).unwrap().unwrap();
        assert_eq!(expense.date, chrono::Local::now().date_naive());
    }

    #[test]
    fn test_empty_description_roundtrip() {
        let db = Database::in_memory().unwrap();
        let id = add(&db, 1.5, Category::Entertainment, date(2024, 2, 29));

        let expense = db.get_expense(id).unwrap().unwrap();
        assert_eq!(expense.description, "");
        assert_eq!(expense.date, date(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_delete_expense() {
        let db = Database::in_memory().unwrap();
        let keep = add(&db, 1.0, Category::Food, date(2024, 5, 1));
        let remove = add(&db, 2.0, Category::Transport, date(2024, 5, 2));

        assert!(db.delete_expense(remove).unwrap());

        let expenses = db.list_expenses().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].id, keep);
        assert!(db.get_expense(remove).unwrap().is_none());
    }

    #[test]
    fn test_delete_missing_expense() {
        let db = Database::in_memory().unwrap();
        let id = add(&db, 1.0, Category::Food, date(2024, 5, 1));

        assert!(!db.delete_expense(id + 100).unwrap());
        assert_eq!(db.count_expenses().unwrap(), 1);
    }

    #[test]
    fn test_clear_expenses() {
        let db = Database::in_memory().unwrap();
        add(&db, 1.0, Category::Food, date(2024, 5, 1));
        add(&db, 2.0, Category::Other, date(2024, 6, 1));

        assert_eq!(db.clear_expenses().unwrap(), 2);
        assert!(db.list_expenses().unwrap().is_empty());
        assert_eq!(db.clear_expenses().unwrap(), 0);
    }

    #[test]
    fn test_monthly_summary_filters_by_month() {
        let db = Database::in_memory().unwrap();
        add(&db, 10.0, Category::Food, date(2024, 5, 1));
        add(&db, 5.0, Category::Food, date(2024, 5, 31));
        add(&db, 7.0, Category::Transport, date(2024, 4, 30));
        add(&db, 3.0, Category::Transport, date(2023, 5, 15));

        let month = ReportMonth::new(2024, 5).unwrap();
        let summary = db.monthly_summary(month).unwrap();

        assert_eq!(summary.month, month);
        assert_eq!(summary.totals.len(), 1);
        assert_eq!(summary.totals.get(&Category::Food), Some(&15.0));
        assert!(!summary.totals.contains_key(&Category::Transport));
        assert_eq!(summary.total, 15.0);
    }

    #[test]
    fn test_monthly_summary_empty_month() {
        let db = Database::in_memory().unwrap();
        add(&db, 10.0, Category::Food, date(2024, 5, 1));

        let summary = db
            .monthly_summary(ReportMonth::new(2024, 6).unwrap())
            .unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.total, 0.0);
    }

    #[test]
    fn test_monthly_breakdown() {
        let db = Database::in_memory().unwrap();
        add(&db, 30.0, Category::Food, date(2024, 5, 1));
        add(&db, 10.0, Category::Food, date(2024, 5, 2));
        add(&db, 60.0, Category::Shopping, date(2024, 5, 3));
        add(&db, 99.0, Category::Other, date(2024, 6, 1));

        let shares = db
            .monthly_breakdown(ReportMonth::new(2024, 5).unwrap())
            .unwrap();

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].category, Category::Shopping);
        assert_eq!(shares[0].amount, 60.0);
        assert_eq!(shares[0].expense_count, 1);
        assert!((shares[0].percentage - 60.0).abs() < 1e-9);

        assert_eq!(shares[1].category, Category::Food);
        assert_eq!(shares[1].amount, 40.0);
        assert_eq!(shares[1].expense_count, 2);

        let total_pct: f64 = shares.iter().map(|s| s.percentage).sum();
        assert!((total_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_breakdown_empty() {
        let db = Database::in_memory().unwrap();
        let shares = db
            .monthly_breakdown(ReportMonth::new(2024, 5).unwrap())
            .unwrap();
        assert!(shares.is_empty());
    }
}
