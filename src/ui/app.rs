use anyhow::Result;

use crate::analysis::CategoryInsight;
use crate::db::Database;
use crate::models::{Month, Transaction};
use crate::snapshot::MonthSnapshot;
use crate::ui::util::clamp_cursor;

/// Number of transactions on the dashboard "recent" card.
pub(crate) const RECENT_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
    Budgets,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Transactions, Self::Budgets]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Budgets => write!(f, "Budgets"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Waiting on a y/N answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeleteTransaction { id: i64, description: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    /// The month every view shows. Only `set_month` changes it.
    pub(crate) month: Month,
    /// Id of the most recent load request.
    generation: u64,
    pub(crate) snapshot: MonthSnapshot,

    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,
    pub(crate) budget_index: usize,
    pub(crate) budget_scroll: usize,

    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(month: Month) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            month,
            generation: 0,
            snapshot: MonthSnapshot::empty(month, 0),

            transaction_index: 0,
            transaction_scroll: 0,
            budget_index: 0,
            budget_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Start a new load; any snapshot from an earlier request is now stale.
    pub(crate) fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Load the current month from the store and install it.
    pub(crate) fn reload(&mut self, db: &Database) -> Result<()> {
        let generation = self.next_generation();
        let snapshot = MonthSnapshot::load(db, self.month, generation)?;
        self.apply_snapshot(snapshot);
        Ok(())
    }

    /// Install `snapshot` if it answers the latest request. Returns whether
    /// it was installed.
    pub(crate) fn apply_snapshot(&mut self, snapshot: MonthSnapshot) -> bool {
        if snapshot.generation != self.generation || snapshot.month != self.month {
            tracing::debug!(
                month = %snapshot.month,
                generation = snapshot.generation,
                latest = self.generation,
                "discarding stale snapshot"
            );
            return false;
        }
        self.snapshot = snapshot;
        clamp_cursor(
            &mut self.transaction_index,
            &mut self.transaction_scroll,
            self.snapshot.transactions.len(),
        );
        let rows = self.budget_rows().len();
        clamp_cursor(&mut self.budget_index, &mut self.budget_scroll, rows);
        true
    }

    pub(crate) fn set_month(&mut self, month: Month, db: &Database) -> Result<()> {
        self.month = month;
        self.transaction_index = 0;
        self.transaction_scroll = 0;
        self.budget_index = 0;
        self.budget_scroll = 0;
        self.reload(db)
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.snapshot.transactions
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.snapshot.transactions.get(self.transaction_index)
    }

    /// Rows on the Budgets screen: every budgeted or spent-in category.
    pub(crate) fn budget_rows(&self) -> &[CategoryInsight] {
        &self.snapshot.analysis.comparison.categories
    }

    // Table header + borders take three rows.
    pub(crate) fn transaction_page(&self) -> usize {
        self.visible_rows.saturating_sub(3).max(1)
    }

    pub(crate) fn budget_page(&self) -> usize {
        self.visible_rows.saturating_sub(4).max(1)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
