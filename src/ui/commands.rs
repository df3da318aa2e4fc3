use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use super::app::{App, InputMode, PendingAction, Screen};
use crate::analysis::format::money;
use crate::db::Database;
use crate::models::{parse_amount, Budget, Category, Month, Transaction, ValidationError};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &Database) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($registry:expr, $desc:expr, $func:expr, $($name:expr),+) => {{
        $(
            $registry.insert(
                $name,
                Command {
                    description: $desc,
                    run: $func,
                },
            );
        )+
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!(r, "Quit FinTrack", cmd_quit, "q", "quit");
    register_command!(r, "Go to Dashboard", cmd_dashboard, "d", "dashboard");
    register_command!(r, "Go to Transactions", cmd_transactions, "t", "transactions");
    register_command!(r, "Go to Budgets", cmd_budgets, "b", "budgets");
    register_command!(r, "Show available commands", cmd_help, "h", "help");
    register_command!(
        r,
        "Show a month (e.g. :month 2025-07; no argument for this month)",
        cmd_month,
        "m",
        "month"
    );
    register_command!(r, "Go to next month", cmd_next_month, "next-month");
    register_command!(r, "Go to previous month", cmd_prev_month, "prev-month");
    register_command!(
        r,
        "Add transaction (e.g. :add 2025-07-14 Food 450 Groceries)",
        cmd_add,
        "a",
        "add"
    );
    register_command!(
        r,
        "Edit selected transaction, or :edit <id> <date> <category> <amount> <description>",
        cmd_edit,
        "e",
        "edit"
    );
    register_command!(
        r,
        "Delete selected transaction, or :delete <id>",
        cmd_delete,
        "delete"
    );
    register_command!(
        r,
        "Set budget for this month (e.g. :budget Food 2000)",
        cmd_budget,
        "budget"
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, db: &Database) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let (cmd_name, args) = match trimmed.split_once(' ') {
        Some((name, rest)) => (name, rest.trim()),
        None => (trimmed, ""),
    };

    if cmd_name.is_empty() {
        return Ok(());
    }
    match COMMANDS.get(cmd_name) {
        Some(cmd) => (cmd.run)(args, app, db),
        None => {
            let suggestion = find_closest(cmd_name);
            app.set_status(format!(
                "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
            ));
            Ok(())
        }
    }
}

fn find_closest(input: &str) -> &'static str {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // aliases make poor suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .copied()
        .unwrap_or("help")
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b): (Vec<char>, Vec<char>) = (a.chars().collect(), b.chars().collect());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Bad input stays in the status line; nothing is written.
fn reject(app: &mut App, command: &str, err: ValidationError) {
    tracing::warn!(command, error = %err, "rejected input");
    app.set_status(err.to_string());
}

// ── Navigation ───────────────────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _db: &Database) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, _db: &Database) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App, _db: &Database) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App, _db: &Database) -> anyhow::Result<()> {
    app.screen = Screen::Budgets;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _db: &Database) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

// ── Month ────────────────────────────────────────────────────

fn cmd_month(args: &str, app: &mut App, db: &Database) -> anyhow::Result<()> {
    let month = if args.is_empty() {
        Month::current()
    } else {
        match Month::from_str(args) {
            Ok(m) => m,
            Err(e) => {
                reject(app, "month", e);
                return Ok(());
            }
        }
    };
    app.set_month(month, db)?;
    app.set_status(format!("Showing {}", month.label()));
    Ok(())
}

fn cmd_next_month(_args: &str, app: &mut App, db: &Database) -> anyhow::Result<()> {
    let month = app.month.next();
    app.set_month(month, db)?;
    app.set_status(format!("Showing {}", month.label()));
    Ok(())
}

fn cmd_prev_month(_args: &str, app: &mut App, db: &Database) -> anyhow::Result<()> {
    let month = app.month.prev();
    app.set_month(month, db)?;
    app.set_status(format!("Showing {}", month.label()));
    Ok(())
}

// ── Transactions ─────────────────────────────────────────────

fn cmd_add(args: &str, app: &mut App, db: &Database) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :add <YYYY-MM-DD> <category> <amount> <description>");
        return Ok(());
    }
    let txn = match Transaction::parse_line(args) {
        Ok(t) => t,
        Err(e) => {
            reject(app, "add", e);
            return Ok(());
        }
    };

    db.insert_transaction(&txn)?;
    app.reload(db)?;
    let note = if app.month.contains(txn.date) {
        String::new()
    } else {
        format!(" to {}", txn.month().label())
    };
    app.set_status(format!(
        "Added {} ({}, {}){note}",
        txn.description,
        txn.category,
        money(txn.amount)
    ));
    Ok(())
}

fn cmd_edit(args: &str, app: &mut App, db: &Database) -> anyhow::Result<()> {
    if args.is_empty() {
        // Prefill the command bar with the selected row.
        match app.selected_transaction() {
            Some(txn) if app.screen == Screen::Transactions => {
                let id = txn.id.unwrap_or_default();
                app.command_input = format!("edit {id} {}", txn.to_line());
                app.input_mode = InputMode::Command;
            }
            _ => app.set_status("Select a transaction on the Transactions screen first"),
        }
        return Ok(());
    }

    let (id, line) = args.split_once(' ').unwrap_or((args, ""));
    let Ok(id) = id.parse::<i64>() else {
        app.set_status(format!("Invalid transaction id: {id}"));
        return Ok(());
    };
    let txn = match Transaction::parse_line(line) {
        Ok(t) => t,
        Err(e) => {
            reject(app, "edit", e);
            return Ok(());
        }
    };

    if db.replace_transaction(id, &txn)? {
        app.reload(db)?;
        app.set_status(format!("Updated transaction {id}"));
    } else {
        app.set_status(format!("No transaction with id {id}"));
    }
    Ok(())
}

fn cmd_delete(args: &str, app: &mut App, db: &Database) -> anyhow::Result<()> {
    let target = if args.is_empty() {
        if app.screen != Screen::Transactions {
            app.set_status("Select a transaction on the Transactions screen first");
            return Ok(());
        }
        app.selected_transaction()
            .and_then(|t| t.id.map(|id| (id, t.description.clone())))
    } else {
        let Ok(id) = args.parse::<i64>() else {
            app.set_status(format!("Invalid transaction id: {args}"));
            return Ok(());
        };
        db.find_transaction(id)?.map(|t| (id, t.description))
    };

    match target {
        Some((id, description)) => {
            app.confirm_message = format!("Delete '{description}'?");
            app.pending_action = Some(PendingAction::DeleteTransaction { id, description });
            app.input_mode = InputMode::Confirm;
        }
        None if args.is_empty() => app.set_status("No transaction selected"),
        None => app.set_status(format!("No transaction with id {args}")),
    }
    Ok(())
}

/// Run the action the user just confirmed.
pub(crate) fn confirm(action: PendingAction, app: &mut App, db: &Database) -> anyhow::Result<()> {
    match action {
        PendingAction::DeleteTransaction { id, description } => {
            if db.delete_transaction(id)? {
                app.set_status(format!("Deleted: {description}"));
            } else {
                app.set_status(format!("Already gone: {description}"));
            }
            app.reload(db)?;
        }
    }
    Ok(())
}

// ── Budgets ──────────────────────────────────────────────────

fn cmd_budget(args: &str, app: &mut App, db: &Database) -> anyhow::Result<()> {
    let Some((category, amount)) = args.split_once(' ') else {
        app.set_status("Usage: :budget <category> <amount>");
        return Ok(());
    };
    let budget = Category::from_str(category)
        .and_then(|c| Ok((c, parse_amount(amount)?)))
        .and_then(|(c, a)| Budget::new(c, app.month, a));
    let budget = match budget {
        Ok(b) => b,
        Err(e) => {
            reject(app, "budget", e);
            return Ok(());
        }
    };

    db.upsert_budget(&budget)?;
    app.reload(db)?;
    app.screen = Screen::Budgets;
    app.set_status(format!(
        "Budget set: {} = {} for {}",
        budget.category,
        money(budget.amount),
        budget.month.label()
    ));
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
