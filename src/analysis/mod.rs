//! Budget-vs-actual engine. Every screen and command that shows spending
//! goes through these functions; nothing re-derives totals on its own.

mod aggregate;
mod compare;
pub(crate) mod format;
mod insights;

pub(crate) use aggregate::{aggregate, total_spent, SpendByCategory};
pub(crate) use compare::{compare, CategoryInsight, Comparison, Status, Totals};
pub(crate) use insights::{generate_insights, top_category, Insight, InsightKind};

use crate::models::{Budget, Month, Transaction};

/// Everything derived for one month.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MonthAnalysis {
    pub(crate) spending: SpendByCategory,
    pub(crate) comparison: Comparison,
    pub(crate) insights: Vec<Insight>,
}

/// Run the full pipeline: aggregate, compare, generate insights.
/// `budgets` are expected to belong to `month`.
pub(crate) fn analyze(transactions: &[Transaction], budgets: &[Budget], month: Month) -> MonthAnalysis {
    let spending = aggregate(transactions, month);
    let comparison = compare(&spending, budgets);
    let insights = generate_insights(
        comparison.totals.total_spent,
        comparison.totals.total_budget,
        &comparison.categories,
    );
    MonthAnalysis {
        spending,
        comparison,
        insights,
    }
}
