use rust_decimal::Decimal;

use super::compare::{utilization, CategoryInsight, Status};
use super::format::{money, percent};

const OVERALL_CAUTION_ABOVE: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsightKind {
    Warning,
    Caution,
    Good,
    Info,
}

impl InsightKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Caution => "caution",
            Self::Good => "good",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Insight {
    pub(crate) kind: InsightKind,
    pub(crate) message: String,
}

impl Insight {
    fn new(kind: InsightKind, message: String) -> Self {
        Self { kind, message }
    }
}

/// Every applicable rule fires, in this order:
/// overall budget use, top spending category, over-budget count,
/// and a set-up prompt when nothing else applied.
pub(crate) fn generate_insights(
    total_spent: Decimal,
    total_budget: Decimal,
    categories: &[CategoryInsight],
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some(overall) = utilization(total_spent, total_budget) {
        let insight = if overall > Decimal::ONE_HUNDRED {
            Insight::new(
                InsightKind::Warning,
                format!(
                    "You've exceeded your total budget by {}",
                    money(total_spent - total_budget)
                ),
            )
        } else if overall > OVERALL_CAUTION_ABOVE {
            Insight::new(
                InsightKind::Caution,
                format!("You've used {}% of your total budget", percent(overall)),
            )
        } else {
            Insight::new(
                InsightKind::Good,
                format!(
                    "You're on track! {}% of budget remaining",
                    percent(Decimal::ONE_HUNDRED - overall)
                ),
            )
        };
        insights.push(insight);
    }

    if let Some(top) = top_category(categories) {
        insights.push(Insight::new(
            InsightKind::Info,
            format!(
                "{} is your highest spending category ({})",
                top.category,
                money(top.spent)
            ),
        ));
    }

    let over_budget = categories
        .iter()
        .filter(|c| c.status == Status::Warning)
        .count();
    if over_budget > 0 {
        let noun = if over_budget == 1 {
            "category"
        } else {
            "categories"
        };
        insights.push(Insight::new(
            InsightKind::Warning,
            format!("{over_budget} {noun} over budget"),
        ));
    }

    if insights.is_empty() {
        insights.push(Insight::new(
            InsightKind::Info,
            "Set up budgets to get personalized spending insights".to_string(),
        ));
    }

    insights
}

/// Highest positive spend; the first one wins a tie.
pub(crate) fn top_category(categories: &[CategoryInsight]) -> Option<&CategoryInsight> {
    categories
        .iter()
        .filter(|c| c.spent > Decimal::ZERO)
        .fold(None, |best: Option<&CategoryInsight>, c| match best {
            Some(b) if b.spent >= c.spent => Some(b),
            _ => Some(c),
        })
}
