use rust_decimal::Decimal;

use super::validation::check_amount;
use super::{Category, Month, ValidationError};

/// Spending limit for one category in one month. The store keeps at most
/// one per (category, month).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Budget {
    pub(crate) id: Option<i64>,
    pub(crate) category: Category,
    pub(crate) month: Month,
    pub(crate) amount: Decimal,
}

impl Budget {
    pub(crate) fn new(
        category: Category,
        month: Month,
        amount: Decimal,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            category,
            month,
            amount: check_amount(amount)?,
        })
    }
}
