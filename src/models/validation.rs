use rust_decimal::Decimal;
use thiserror::Error;

/// Input rejected before it reaches the store or the analysis engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("Invalid month '{0}'. Use YYYY-MM (e.g. 2025-07)")]
    InvalidMonth(String),
    #[error("Invalid category '{0}'. Expected one of: Food, Rent, Utilities, Travel, Entertainment")]
    InvalidCategory(String),
    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(Decimal),
    #[error("Amount {0} is above the limit of 1,000,000,000,000,000")]
    AmountTooLarge(Decimal),
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Invalid date '{0}'. Use YYYY-MM-DD (e.g. 2025-07-14)")]
    InvalidDate(String),
    #[error("Description must not be empty")]
    EmptyDescription,
}

/// Largest amount a transaction or budget may carry: 10^15.
pub(crate) const MAX_AMOUNT: Decimal =
    Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Amounts must be positive and at most [`MAX_AMOUNT`].
pub(crate) fn check_amount(amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge(amount));
    }
    Ok(amount)
}
