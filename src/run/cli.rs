use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::analysis::format::{money, percent};
use crate::db::Database;
use crate::models::{
    parse_amount, Budget, Category, Month, Transaction, ValidationError, DATE_FORMAT,
};
use crate::snapshot::MonthSnapshot;

/// `args` excludes the program name and any global flags.
pub(crate) fn as_cli(args: &[String], db: &Database) -> Result<()> {
    let Some((command, rest)) = args.split_first() else {
        print_usage();
        return Ok(());
    };
    match command.as_str() {
        "add" => cli_add(rest, db),
        "edit" => cli_edit(rest, db),
        "delete" | "rm" => cli_delete(rest, db),
        "list" | "ls" => cli_list(rest, db),
        "budget" => cli_budget(rest, db),
        "budgets" => cli_budgets(rest, db),
        "summary" | "s" => cli_summary(rest, db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("fintrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("FinTrack - local personal finance tracker");
    println!();
    println!("Usage: fintrack [--db <path>] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                                   Launch interactive TUI");
    println!("  add <YYYY-MM-DD> <category> <amount> <description>");
    println!("                                           Record a transaction");
    println!("  edit <id> <YYYY-MM-DD> <category> <amount> <description>");
    println!("                                           Replace a transaction");
    println!("  delete <id>                              Delete a transaction");
    println!("  list [--month <YYYY-MM>]                 List transactions, newest first");
    println!("  budget <category> <amount> [--month <YYYY-MM>]");
    println!("                                           Set a monthly budget (default: this month)");
    println!("  budgets [YYYY-MM]                        List budgets for a month");
    println!("  summary [YYYY-MM]                        Budget vs actual with insights");
    println!("  --help, -h                               Show this help");
    println!("  --version, -V                            Show version");
    println!();
    println!(
        "Categories: {}",
        Category::all()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
}

/// Remove `flag <value>` from `args`, returning the value.
pub(crate) fn take_flag(args: &mut Vec<String>, flag: &str) -> Result<Option<String>> {
    let Some(pos) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        anyhow::bail!("{flag} needs a value");
    }
    let value = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(value))
}

/// Log and convert rejected input; the command exits non-zero.
fn reject(command: &str, err: ValidationError) -> anyhow::Error {
    tracing::warn!(command, error = %err, "rejected input");
    err.into()
}

fn parse_id(arg: Option<&String>, usage: &str) -> Result<i64> {
    let arg = arg.ok_or_else(|| anyhow::anyhow!("Usage: {usage}"))?;
    arg.parse()
        .with_context(|| format!("Invalid transaction id: {arg}"))
}

/// Optional positional month, defaulting to the current one.
fn month_arg(args: &[String]) -> Result<Month> {
    match args.first().filter(|a| !a.starts_with('-')) {
        Some(m) => Month::from_str(m).map_err(|e| reject("month", e)),
        None => Ok(Month::current()),
    }
}

// ── Transactions ─────────────────────────────────────────────

fn cli_add(args: &[String], db: &Database) -> Result<()> {
    if args.is_empty() {
        anyhow::bail!("Usage: fintrack add <YYYY-MM-DD> <category> <amount> <description>");
    }
    let txn = Transaction::parse_line(&args.join(" ")).map_err(|e| reject("add", e))?;
    let id = db.insert_transaction(&txn)?;
    println!(
        "Added transaction {id}: {} {} {} {}",
        txn.date.format(DATE_FORMAT),
        txn.category,
        money(txn.amount),
        txn.description
    );
    Ok(())
}

fn cli_edit(args: &[String], db: &Database) -> Result<()> {
    const USAGE: &str = "fintrack edit <id> <YYYY-MM-DD> <category> <amount> <description>";
    let id = parse_id(args.first(), USAGE)?;
    let txn = Transaction::parse_line(&args[1..].join(" ")).map_err(|e| reject("edit", e))?;
    if !db.replace_transaction(id, &txn)? {
        anyhow::bail!("No transaction with id {id}");
    }
    println!("Updated transaction {id}");
    Ok(())
}

fn cli_delete(args: &[String], db: &Database) -> Result<()> {
    let id = parse_id(args.first(), "fintrack delete <id>")?;
    if !db.delete_transaction(id)? {
        anyhow::bail!("No transaction with id {id}");
    }
    println!("Deleted transaction {id}");
    Ok(())
}

fn cli_list(args: &[String], db: &Database) -> Result<()> {
    let mut args = args.to_vec();
    let month = take_flag(&mut args, "--month")?
        .map(|m| Month::from_str(&m).map_err(|e| reject("list", e)))
        .transpose()?;

    let txns = match month {
        Some(m) => db.find_transactions_in(m)?,
        None => db.find_transactions()?,
    };
    print!("{}", format_transactions(&txns, month));
    Ok(())
}

pub(crate) fn format_transactions(txns: &[Transaction], month: Option<Month>) -> String {
    let mut out = String::new();
    if txns.is_empty() {
        match month {
            Some(m) => {
                let _ = writeln!(out, "No transactions for {}", m.label());
            }
            None => {
                let _ = writeln!(out, "No transactions");
            }
        }
        return out;
    }

    let _ = writeln!(
        out,
        "{:<6} {:<10}  {:<13} {:>14}  Description",
        "ID", "Date", "Category", "Amount"
    );
    let _ = writeln!(out, "{}", "─".repeat(72));
    for t in txns {
        let _ = writeln!(
            out,
            "{:<6} {:<10}  {:<13} {:>14}  {}",
            t.id.unwrap_or_default(),
            t.date.format(DATE_FORMAT).to_string(),
            t.category.as_str(),
            money(t.amount),
            t.description
        );
    }
    out
}

// ── Budgets ──────────────────────────────────────────────────

fn cli_budget(args: &[String], db: &Database) -> Result<()> {
    let mut args = args.to_vec();
    let month = match take_flag(&mut args, "--month")? {
        Some(m) => Month::from_str(&m).map_err(|e| reject("budget", e))?,
        None => Month::current(),
    };
    let [category, amount] = args.as_slice() else {
        anyhow::bail!("Usage: fintrack budget <category> <amount> [--month <YYYY-MM>]");
    };

    let category = Category::from_str(category).map_err(|e| reject("budget", e))?;
    let amount = parse_amount(amount).map_err(|e| reject("budget", e))?;
    let budget = Budget::new(category, month, amount).map_err(|e| reject("budget", e))?;

    db.upsert_budget(&budget)?;
    println!(
        "Budget set: {} = {} for {}",
        budget.category,
        money(budget.amount),
        month.label()
    );
    Ok(())
}

fn cli_budgets(args: &[String], db: &Database) -> Result<()> {
    let month = month_arg(args)?;
    let budgets = db.find_budgets(month)?;
    print!("{}", format_budgets(&budgets, month));
    Ok(())
}

pub(crate) fn format_budgets(budgets: &[Budget], month: Month) -> String {
    let mut out = String::new();
    if budgets.is_empty() {
        let _ = writeln!(out, "No budgets set for {}", month.label());
        let _ = writeln!(out, "Set up budgets to start tracking your spending:");
        let _ = writeln!(out, "  fintrack budget <category> <amount> --month {month}");
        return out;
    }

    let _ = writeln!(out, "Budgets for {}", month.label());
    let _ = writeln!(out, "{}", "─".repeat(32));
    for b in budgets {
        let _ = writeln!(out, "  {:<15} {:>14}", b.category.as_str(), money(b.amount));
    }
    let total = budgets
        .iter()
        .fold(Decimal::ZERO, |acc, b| acc.saturating_add(b.amount));
    let _ = writeln!(out, "{}", "─".repeat(32));
    let _ = writeln!(out, "  {:<15} {:>14}", "Total", money(total));
    out
}

// ── Summary ──────────────────────────────────────────────────

fn cli_summary(args: &[String], db: &Database) -> Result<()> {
    let month = month_arg(args)?;
    let snapshot = MonthSnapshot::load(db, month, 0)?;
    print!("{}", format_summary(&snapshot));
    Ok(())
}

pub(crate) fn format_summary(snapshot: &MonthSnapshot) -> String {
    let analysis = &snapshot.analysis;
    let totals = &analysis.comparison.totals;
    let mut out = String::new();

    let _ = writeln!(out, "FinTrack · {}", snapshot.month.label());
    let _ = writeln!(out, "{}", "─".repeat(40));
    let _ = writeln!(out, "  Total spent:   {}", money(totals.total_spent));
    let _ = writeln!(out, "  Total budget:  {}", money(totals.total_budget));
    match totals.overall_utilization {
        Some(u) => {
            let _ = writeln!(
                out,
                "  Remaining:     {} ({}% of budget used)",
                money(totals.total_remaining),
                percent(u)
            );
        }
        None => {
            let _ = writeln!(out, "  Remaining:     {}", money(totals.total_remaining));
        }
    }
    let _ = writeln!(out, "  Transactions:  {}", snapshot.transactions.len());
    if let Some(top) = snapshot.top_category() {
        let _ = writeln!(out, "  Top category:  {} ({})", top.category, money(top.spent));
    }

    if !analysis.comparison.categories.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  {:<15} {:>12} {:>12} {:>12} {:>7}  Status",
            "Category", "Spent", "Budget", "Remaining", "Used"
        );
        for row in &analysis.comparison.categories {
            let used = row
                .utilization
                .map(|u| format!("{}%", percent(u)))
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(
                out,
                "  {:<15} {:>12} {:>12} {:>12} {:>7}  {}",
                row.category.as_str(),
                money(row.spent),
                money(row.budgeted),
                money(row.remaining),
                used,
                row.status
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Insights:");
    for insight in &analysis.insights {
        let _ = writeln!(out, "  [{}] {}", insight.kind, insight.message);
    }

    let recent = snapshot.recent(3);
    if !recent.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Recent:");
        for t in recent {
            let _ = writeln!(
                out,
                "  {}  {:<13} {:>12}  {}",
                t.date.format(DATE_FORMAT),
                t.category.as_str(),
                money(t.amount),
                t.description
            );
        }
    }
    out
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
