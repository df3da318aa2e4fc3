use rust_decimal::Decimal;
use std::collections::HashSet;

use super::{total_spent, SpendByCategory};
use crate::models::{Budget, Category};

const CAUTION_FROM: Decimal = Decimal::from_parts(75, 0, 0, false, 0);
const WARNING_ABOVE: Decimal = Decimal::from_parts(90, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    Good,
    Caution,
    Warning,
}

impl Status {
    /// Without a utilization (no budget), any spend is a warning.
    pub(crate) fn classify(utilization: Option<Decimal>, spent: Decimal) -> Self {
        match utilization {
            Some(u) if u > WARNING_ABOVE => Self::Warning,
            Some(u) if u >= CAUTION_FROM => Self::Caution,
            Some(_) => Self::Good,
            None if spent > Decimal::ZERO => Self::Warning,
            None => Self::Good,
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Caution => "caution",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Budget-vs-actual for one category in one month.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryInsight {
    pub(crate) category: Category,
    pub(crate) budgeted: Decimal,
    pub(crate) spent: Decimal,
    pub(crate) remaining: Decimal,
    /// Percent of budget spent; `None` when nothing was budgeted.
    pub(crate) utilization: Option<Decimal>,
    pub(crate) status: Status,
}

impl CategoryInsight {
    fn new(category: Category, budgeted: Decimal, spent: Decimal) -> Self {
        let utilization = utilization(spent, budgeted);
        Self {
            category,
            budgeted,
            spent,
            remaining: budgeted - spent,
            utilization,
            status: Status::classify(utilization, spent),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Totals {
    pub(crate) total_budget: Decimal,
    pub(crate) total_spent: Decimal,
    pub(crate) total_remaining: Decimal,
    pub(crate) overall_utilization: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Comparison {
    pub(crate) categories: Vec<CategoryInsight>,
    pub(crate) totals: Totals,
}

/// `spent / budgeted * 100`, or `None` if there is no positive budget.
pub(crate) fn utilization(spent: Decimal, budgeted: Decimal) -> Option<Decimal> {
    if budgeted <= Decimal::ZERO {
        return None;
    }
    spent
        .checked_div(budgeted)?
        .checked_mul(Decimal::ONE_HUNDRED)
}

/// Join spend against budgets. Budgeted rows keep the budgets' order;
/// categories with spend but no budget follow, biggest spend first.
pub(crate) fn compare(spend: &SpendByCategory, budgets: &[Budget]) -> Comparison {
    let mut seen: HashSet<Category> = HashSet::new();
    let mut categories: Vec<CategoryInsight> = Vec::with_capacity(budgets.len() + spend.len());

    for budget in budgets {
        if !seen.insert(budget.category) {
            tracing::warn!(
                category = %budget.category,
                month = %budget.month,
                "ignoring repeated budget for category"
            );
            continue;
        }
        let spent = spend
            .get(&budget.category)
            .copied()
            .unwrap_or(Decimal::ZERO);
        categories.push(CategoryInsight::new(budget.category, budget.amount, spent));
    }

    let mut unbudgeted: Vec<CategoryInsight> = spend
        .iter()
        .filter(|(category, _)| !seen.contains(category))
        .map(|(category, spent)| CategoryInsight::new(*category, Decimal::ZERO, *spent))
        .collect();
    // Stable sort: equal spend stays in catalog order.
    unbudgeted.sort_by(|a, b| b.spent.cmp(&a.spent));
    categories.extend(unbudgeted);

    let total_budget = categories
        .iter()
        .fold(Decimal::ZERO, |acc, c| acc.saturating_add(c.budgeted));
    let total_spent = total_spent(spend);

    Comparison {
        totals: Totals {
            total_budget,
            total_spent,
            total_remaining: total_budget - total_spent,
            overall_utilization: utilization(total_spent, total_budget),
        },
        categories,
    }
}
