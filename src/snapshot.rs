use anyhow::{Context, Result};

use crate::analysis::{analyze, top_category, CategoryInsight, MonthAnalysis};
use crate::db::Database;
use crate::models::{Budget, Month, Transaction};

/// Everything a view needs for one month, loaded in one go.
///
/// `generation` identifies the request that produced it; the app only
/// installs the snapshot of its latest request, so a load that finishes
/// after the user has moved on is dropped instead of overwriting newer data.
#[derive(Debug, Clone)]
pub(crate) struct MonthSnapshot {
    pub(crate) generation: u64,
    pub(crate) month: Month,
    /// The month's transactions, newest first.
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) budgets: Vec<Budget>,
    pub(crate) analysis: MonthAnalysis,
}

impl MonthSnapshot {
    pub(crate) fn load(db: &Database, month: Month, generation: u64) -> Result<Self> {
        let transactions = db
            .find_transactions()
            .context("Failed to load transactions")?;
        let budgets = db
            .find_budgets(month)
            .with_context(|| format!("Failed to load budgets for {month}"))?;
        tracing::debug!(
            %month,
            generation,
            transactions = transactions.len(),
            budgets = budgets.len(),
            "loaded month snapshot"
        );
        Ok(Self::build(month, generation, transactions, budgets))
    }

    pub(crate) fn build(
        month: Month,
        generation: u64,
        transactions: Vec<Transaction>,
        budgets: Vec<Budget>,
    ) -> Self {
        let analysis = analyze(&transactions, &budgets, month);
        let mut transactions: Vec<Transaction> = transactions
            .into_iter()
            .filter(|t| month.contains(t.date))
            .collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Self {
            generation,
            month,
            transactions,
            budgets,
            analysis,
        }
    }

    pub(crate) fn empty(month: Month, generation: u64) -> Self {
        Self::build(month, generation, Vec::new(), Vec::new())
    }

    /// Up to `n` most recent transactions of the month.
    pub(crate) fn recent(&self, n: usize) -> &[Transaction] {
        &self.transactions[..n.min(self.transactions.len())]
    }

    pub(crate) fn top_category(&self) -> Option<&CategoryInsight> {
        top_category(&self.analysis.comparison.categories)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
