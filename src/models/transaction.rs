use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::validation::check_amount;
use super::{Category, Month, ValidationError};

/// Storage and input format for transaction dates.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    pub(crate) id: Option<i64>,
    pub(crate) amount: Decimal,
    pub(crate) date: NaiveDate,
    pub(crate) description: String,
    pub(crate) category: Category,
}

impl Transaction {
    pub(crate) fn new(
        amount: Decimal,
        date: NaiveDate,
        description: &str,
        category: Category,
    ) -> Result<Self, ValidationError> {
        let amount = check_amount(amount)?;
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(Self {
            id: None,
            amount,
            date,
            description: description.to_string(),
            category,
        })
    }

    /// Parse `<YYYY-MM-DD> <category> <amount> <description...>`.
    /// A missing field reports the error for that field.
    pub(crate) fn parse_line(line: &str) -> Result<Self, ValidationError> {
        let (date, rest) = next_token(line);
        let (category, rest) = next_token(rest);
        let (amount, description) = next_token(rest);
        let date = parse_date(date)?;
        let category = Category::from_str(category)?;
        let amount = parse_amount(amount)?;
        Self::new(amount, date, description, category)
    }

    pub(crate) fn month(&self) -> Month {
        Month::of(self.date)
    }

    /// The inverse of `parse_line`, used to prefill edits.
    pub(crate) fn to_line(&self) -> String {
        format!(
            "{} {} {} {}",
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount,
            self.description
        )
    }
}

fn next_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(s.trim().to_string()))
}

/// Accepts plain decimals with optional `₹`/`$` prefix and `,` grouping.
pub(crate) fn parse_amount(s: &str) -> Result<Decimal, ValidationError> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, '₹' | '$' | ','))
        .collect();
    Decimal::from_str(&cleaned).map_err(|_| ValidationError::InvalidAmount(s.trim().to_string()))
}
