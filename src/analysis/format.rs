use rust_decimal::{Decimal, RoundingStrategy};

pub(crate) const CURRENCY_SYMBOL: &str = "₹";

/// Money as shown to the user: currency symbol, `,` thousands grouping,
/// at most two decimals with trailing zeros dropped.
/// e.g. `1234.5` → `"₹1,234.5"`, `-500` → `"-₹500"`
pub(crate) fn money(val: Decimal) -> String {
    let rounded = val
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let int_digits: Vec<char> = int_part.chars().collect();
    let with_commas: String = int_digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(",");

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{CURRENCY_SYMBOL}{with_commas}.{frac}"),
        None => format!("{sign}{CURRENCY_SYMBOL}{with_commas}"),
    }
}

/// One-decimal percentage without the `%` sign, e.g. `95` → `"95.0"`.
pub(crate) fn percent(val: Decimal) -> String {
    let rounded = val.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}")
}
