mod budget;
mod category;
mod month;
mod transaction;
mod validation;

pub(crate) use budget::Budget;
pub(crate) use category::Category;
pub(crate) use month::Month;
pub(crate) use transaction::{parse_amount, parse_date, Transaction, DATE_FORMAT};
pub(crate) use validation::ValidationError;

#[cfg(test)]
mod tests;
