#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn setup(month: &str) -> (App, Database) {
    let db = Database::open_in_memory().unwrap();
    let mut app = App::new(Month::from_str(month).unwrap());
    app.reload(&db).unwrap();
    (app, db)
}

fn run(input: &str, app: &mut App, db: &Database) {
    handle_command(input, app, db).unwrap();
}

// ── Registry ──────────────────────────────────────────────────

#[test]
fn test_unknown_command_suggests() {
    let (mut app, db) = setup("2025-07");
    run("buget Food 10", &mut app, &db);
    assert_eq!(
        app.status_message,
        "Unknown command: :buget. Did you mean :budget?"
    );
}

#[test]
fn test_aliases_share_description() {
    assert_eq!(COMMANDS["q"].description, COMMANDS["quit"].description);
    assert_eq!(COMMANDS["a"].description, COMMANDS["add"].description);
}

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("add", "add"), 0);
    assert_eq!(levenshtein("ad", "add"), 1);
    assert_eq!(levenshtein("next", "next-month"), 6);
    assert_eq!(levenshtein("", "help"), 4);
}

#[test]
fn test_navigation_and_quit() {
    let (mut app, db) = setup("2025-07");
    run("t", &mut app, &db);
    assert_eq!(app.screen, Screen::Transactions);
    run("budgets", &mut app, &db);
    assert_eq!(app.screen, Screen::Budgets);
    run("d", &mut app, &db);
    assert_eq!(app.screen, Screen::Dashboard);
    run("help", &mut app, &db);
    assert!(app.show_help);
    run("q", &mut app, &db);
    assert!(!app.running);
}

// ── Month ─────────────────────────────────────────────────────

#[test]
fn test_month_commands() {
    let (mut app, db) = setup("2025-12");
    run("next-month", &mut app, &db);
    assert_eq!(app.month.to_string(), "2026-01");
    assert_eq!(app.snapshot.month, app.month);
    run("prev-month", &mut app, &db);
    run("prev-month", &mut app, &db);
    assert_eq!(app.month.to_string(), "2025-11");
    run("month 2024-02", &mut app, &db);
    assert_eq!(app.month.to_string(), "2024-02");
    assert_eq!(app.status_message, "Showing February 2024");
}

#[test]
fn test_month_rejects_bad_input() {
    let (mut app, db) = setup("2025-07");
    let before = app.snapshot.generation;
    run("month 2025-13", &mut app, &db);
    assert_eq!(app.month.to_string(), "2025-07");
    assert_eq!(app.snapshot.generation, before);
    assert!(app.status_message.starts_with("Invalid month '2025-13'"));
}

// ── Transactions ──────────────────────────────────────────────

#[test]
fn test_add_updates_snapshot() {
    let (mut app, db) = setup("2025-07");
    run("add 2025-07-14 food 450 Weekly groceries", &mut app, &db);

    assert_eq!(app.transactions().len(), 1);
    let txn = &app.transactions()[0];
    assert_eq!(txn.category, Category::Food);
    assert_eq!(txn.amount, dec!(450));
    assert_eq!(txn.description, "Weekly groceries");
    assert_eq!(app.snapshot.analysis.comparison.totals.total_spent, dec!(450));
    assert_eq!(app.status_message, "Added Weekly groceries (Food, ₹450)");
}

#[test]
fn test_add_to_other_month() {
    let (mut app, db) = setup("2025-07");
    run("add 2025-08-01 Rent 15000 August rent", &mut app, &db);
    assert!(app.transactions().is_empty());
    assert_eq!(db.find_transactions().unwrap().len(), 1);
    assert!(app.status_message.ends_with(" to August 2025"));
}

#[test]
fn test_add_rejects_invalid_input() {
    let (mut app, db) = setup("2025-07");
    run("add 2025-07-14 Groceries 450 Shop", &mut app, &db);
    assert!(app.status_message.starts_with("Invalid category 'Groceries'"));
    run("add 2025-07-14 Food 0 Free lunch", &mut app, &db);
    assert_eq!(app.status_message, "Amount must be greater than zero (got 0)");
    run("add 2025-07-14 Food 12", &mut app, &db);
    assert_eq!(app.status_message, "Description must not be empty");
    assert!(db.find_transactions().unwrap().is_empty());
}

#[test]
fn test_edit_prefills_selected_row() {
    let (mut app, db) = setup("2025-07");
    run("add 2025-07-14 Travel 120.50 Metro card", &mut app, &db);
    let id = app.transactions()[0].id.unwrap();

    run("t", &mut app, &db);
    run("edit", &mut app, &db);
    assert_eq!(app.input_mode, InputMode::Command);
    assert_eq!(
        app.command_input,
        format!("edit {id} 2025-07-14 Travel 120.50 Metro card")
    );
}

#[test]
fn test_edit_outside_transactions_screen() {
    let (mut app, db) = setup("2025-07");
    run("add 2025-07-14 Travel 120 Metro", &mut app, &db);
    run("edit", &mut app, &db);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.command_input.is_empty());
}

#[test]
fn test_edit_replaces_transaction() {
    let (mut app, db) = setup("2025-07");
    run("add 2025-07-14 Travel 120 Metro", &mut app, &db);
    let id = app.transactions()[0].id.unwrap();

    run(&format!("edit {id} 2025-07-15 Entertainment 300 Movie night"), &mut app, &db);
    assert_eq!(app.status_message, format!("Updated transaction {id}"));
    let txn = &app.transactions()[0];
    assert_eq!(txn.category, Category::Entertainment);
    assert_eq!(txn.amount, dec!(300));
    assert_eq!(txn.description, "Movie night");
}

#[test]
fn test_edit_missing_id() {
    let (mut app, db) = setup("2025-07");
    run("edit 99 2025-07-15 Food 3 Tea", &mut app, &db);
    assert_eq!(app.status_message, "No transaction with id 99");
    run("edit abc 2025-07-15 Food 3 Tea", &mut app, &db);
    assert_eq!(app.status_message, "Invalid transaction id: abc");
    assert!(db.find_transactions().unwrap().is_empty());
}

#[test]
fn test_delete_asks_then_deletes() {
    let (mut app, db) = setup("2025-07");
    run("add 2025-07-14 Food 80 Snacks", &mut app, &db);
    run("t", &mut app, &db);
    run("delete", &mut app, &db);

    assert_eq!(app.input_mode, InputMode::Confirm);
    assert_eq!(app.confirm_message, "Delete 'Snacks'?");
    let action = app.pending_action.take().unwrap();
    confirm(action, &mut app, &db).unwrap();

    assert!(app.transactions().is_empty());
    assert!(db.find_transactions().unwrap().is_empty());
    assert_eq!(app.status_message, "Deleted: Snacks");
}

#[test]
fn test_delete_by_id() {
    let (mut app, db) = setup("2025-07");
    run("add 2025-07-14 Food 80 Snacks", &mut app, &db);
    let id = app.transactions()[0].id.unwrap();

    run(&format!("delete {id}"), &mut app, &db);
    assert_eq!(
        app.pending_action,
        Some(PendingAction::DeleteTransaction {
            id,
            description: "Snacks".into()
        })
    );

    run("delete 4242", &mut app, &db);
    assert_eq!(app.status_message, "No transaction with id 4242");
}

// ── Budgets ───────────────────────────────────────────────────

#[test]
fn test_budget_sets_for_current_month() {
    let (mut app, db) = setup("2025-07");
    run("add 2025-07-14 Food 1900 Groceries", &mut app, &db);
    run("budget food 2000", &mut app, &db);

    assert_eq!(app.screen, Screen::Budgets);
    assert_eq!(app.status_message, "Budget set: Food = ₹2,000 for July 2025");
    let rows = app.budget_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].budgeted, dec!(2000));
    assert_eq!(rows[0].utilization, Some(dec!(95)));

    run("budget Food 2,500", &mut app, &db);
    let budgets = db.find_budgets(app.month).unwrap();
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0].amount, dec!(2500));
}

#[test]
fn test_budget_rejects_invalid_input() {
    let (mut app, db) = setup("2025-07");
    run("budget Food", &mut app, &db);
    assert_eq!(app.status_message, "Usage: :budget <category> <amount>");
    run("budget Food -5", &mut app, &db);
    assert_eq!(app.status_message, "Amount must be greater than zero (got -5)");
    run("budget Food lots", &mut app, &db);
    assert_eq!(app.status_message, "Invalid amount 'lots'");
    run("budget Shopping 10", &mut app, &db);
    assert!(app.status_message.starts_with("Invalid category 'Shopping'"));
    assert!(db.find_budgets(app.month).unwrap().is_empty());
}
