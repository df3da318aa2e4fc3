use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Category, Month, Transaction};

/// Total spend per category for one month. A category with no spend is
/// absent rather than zero.
pub(crate) type SpendByCategory = BTreeMap<Category, Decimal>;

/// Sum transaction amounts per category for transactions dated in `month`.
pub(crate) fn aggregate(transactions: &[Transaction], month: Month) -> SpendByCategory {
    let mut totals = SpendByCategory::new();
    for txn in transactions.iter().filter(|t| month.contains(t.date)) {
        let total = totals.entry(txn.category).or_insert(Decimal::ZERO);
        *total = total.saturating_add(txn.amount);
    }
    totals
}

/// Sum of every category's spend. Like `aggregate`, it saturates at
/// `Decimal::MAX` rather than overflowing on rows written by other tools.
pub(crate) fn total_spent(spend: &SpendByCategory) -> Decimal {
    spend
        .values()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(*v))
}
