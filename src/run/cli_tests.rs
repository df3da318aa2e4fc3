#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn args(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

fn month(s: &str) -> Month {
    Month::from_str(s).unwrap()
}

#[test]
fn test_take_flag() {
    let mut a = args("list --month 2025-07 extra");
    assert_eq!(
        take_flag(&mut a, "--month").unwrap().as_deref(),
        Some("2025-07")
    );
    assert_eq!(a, args("list extra"));

    let mut a = args("summary");
    assert_eq!(take_flag(&mut a, "--db").unwrap(), None);
    assert_eq!(a, args("summary"));

    let mut a = args("list --month");
    assert!(take_flag(&mut a, "--month").is_err());
}

#[test]
fn test_no_args_and_help_succeed() {
    let db = Database::open_in_memory().unwrap();
    assert!(as_cli(&[], &db).is_ok());
    assert!(as_cli(&args("--help"), &db).is_ok());
    assert!(as_cli(&args("-V"), &db).is_ok());
}

#[test]
fn test_unknown_command_fails() {
    let db = Database::open_in_memory().unwrap();
    let err = as_cli(&args("frobnicate"), &db).unwrap_err();
    assert!(err.to_string().contains("Unknown command: frobnicate"));
}

#[test]
fn test_add_edit_delete() {
    let db = Database::open_in_memory().unwrap();
    as_cli(&args("add 2025-07-14 food 250.50 Groceries at market"), &db).unwrap();

    let txns = db.find_transactions().unwrap();
    assert_eq!(txns.len(), 1);
    let id = txns[0].id.unwrap();
    assert_eq!(txns[0].description, "Groceries at market");
    assert_eq!(txns[0].amount, dec!(250.50));

    as_cli(&args(&format!("edit {id} 2025-07-15 Travel 90 Bus pass")), &db).unwrap();
    let edited = db.find_transaction(id).unwrap().unwrap();
    assert_eq!(edited.category, Category::Travel);
    assert_eq!(edited.description, "Bus pass");

    as_cli(&args(&format!("delete {id}")), &db).unwrap();
    assert!(db.find_transactions().unwrap().is_empty());

    let err = as_cli(&args(&format!("delete {id}")), &db).unwrap_err();
    assert!(err.to_string().contains("No transaction with id"));
}

#[test]
fn test_add_rejects_invalid_input() {
    let db = Database::open_in_memory().unwrap();
    for line in [
        "add",
        "add 2025-13-01 Food 10 Lunch",
        "add 2025-07-01 Shopping 10 Shoes",
        "add 2025-07-01 Food -5 Refund",
        "add 2025-07-01 Food 10",
        "add 2025-07-01 Food 79228162514264337593543950335 Yacht",
    ] {
        assert!(as_cli(&args(line), &db).is_err(), "{line}");
    }
    assert!(db.find_transactions().unwrap().is_empty());
}

#[test]
fn test_edit_bad_id() {
    let db = Database::open_in_memory().unwrap();
    let err = as_cli(&args("edit abc 2025-07-01 Food 10 Lunch"), &db).unwrap_err();
    assert!(err.to_string().contains("Invalid transaction id: abc"));
    assert!(as_cli(&args("edit"), &db).is_err());
}

#[test]
fn test_budget_with_month_flag() {
    let db = Database::open_in_memory().unwrap();
    as_cli(&args("budget Food 5000 --month 2025-07"), &db).unwrap();
    as_cli(&args("budget --month 2025-07 food 6000"), &db).unwrap();

    let budgets = db.find_budgets(month("2025-07")).unwrap();
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0].amount, dec!(6000));
}

#[test]
fn test_budget_rejects_invalid_input() {
    let db = Database::open_in_memory().unwrap();
    for line in [
        "budget Food",
        "budget Food 0 --month 2025-07",
        "budget Shopping 100 --month 2025-07",
        "budget Food 100 --month July",
        "budget Food 2000000000000000 --month 2025-07",
    ] {
        assert!(as_cli(&args(line), &db).is_err(), "{line}");
    }
    assert!(db.find_budgets(month("2025-07")).unwrap().is_empty());
}

#[test]
fn test_list_and_summary_reject_bad_month() {
    let db = Database::open_in_memory().unwrap();
    assert!(as_cli(&args("list --month 2025-7x"), &db).is_err());
    assert!(as_cli(&args("summary 2025-00"), &db).is_err());
    assert!(as_cli(&args("list --month 2025-07"), &db).is_ok());
    assert!(as_cli(&args("budgets 2025-07"), &db).is_ok());
}

#[test]
fn test_format_transactions_empty() {
    assert_eq!(
        format_transactions(&[], Some(month("2025-07"))),
        "No transactions for July 2025\n"
    );
    assert_eq!(format_transactions(&[], None), "No transactions\n");
}

#[test]
fn test_format_budgets() {
    let m = month("2025-07");
    let empty = format_budgets(&[], m);
    assert!(empty.starts_with("No budgets set for July 2025"));
    assert!(empty.contains("--month 2025-07"));

    let budgets = vec![
        Budget::new(Category::Food, m, dec!(5000)).unwrap(),
        Budget::new(Category::Rent, m, dec!(15000)).unwrap(),
    ];
    let out = format_budgets(&budgets, m);
    assert!(out.contains("Food"));
    assert!(out.contains("₹5,000"));
    assert!(out.contains("₹20,000"));
}

#[test]
fn test_format_summary() {
    let db = Database::open_in_memory().unwrap();
    as_cli(&args("budget Food 2000 --month 2025-07"), &db).unwrap();
    as_cli(&args("add 2025-07-03 Food 1000 Groceries"), &db).unwrap();
    as_cli(&args("add 2025-07-09 Travel 300 Taxi"), &db).unwrap();
    as_cli(&args("add 2025-08-01 Food 999 Next month"), &db).unwrap();

    let snapshot = MonthSnapshot::load(&db, month("2025-07"), 0).unwrap();
    let out = format_summary(&snapshot);

    assert!(out.starts_with("FinTrack · July 2025"));
    assert!(out.contains("Total spent:   ₹1,300"));
    assert!(out.contains("Total budget:  ₹2,000"));
    assert!(out.contains("Transactions:  2"));
    assert!(out.contains("Top category:  Food (₹1,000)"));
    assert!(out.contains("Travel"));
    assert!(out.contains("Insights:"));
    assert!(out.contains("Taxi"));
    assert!(!out.contains("Next month"));
}

#[test]
fn test_format_summary_empty_month() {
    let snapshot = MonthSnapshot::empty(month("2025-07"), 0);
    let out = format_summary(&snapshot);
    assert!(out.contains("Total spent:   ₹0"));
    assert!(!out.contains("Recent:"));
    assert!(!out.contains("Top category"));
}
