#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_parse() {
    assert_eq!(Category::from_str("Food").unwrap(), Category::Food);
    assert_eq!(Category::from_str("food").unwrap(), Category::Food);
    assert_eq!(Category::from_str("RENT").unwrap(), Category::Rent);
    assert_eq!(Category::from_str(" utilities ").unwrap(), Category::Utilities);
    assert_eq!(Category::from_str("travel").unwrap(), Category::Travel);
    assert_eq!(
        Category::from_str("Entertainment").unwrap(),
        Category::Entertainment
    );
}

#[test]
fn test_category_parse_rejects_unknown() {
    assert_eq!(
        Category::from_str("Groceries"),
        Err(ValidationError::InvalidCategory("Groceries".into()))
    );
    assert!(Category::from_str("").is_err());
}

#[test]
fn test_category_all_in_catalog_order() {
    let all = Category::all();
    assert_eq!(all.len(), 5);
    assert_eq!(all[0], Category::Food);
    assert_eq!(all[4], Category::Entertainment);
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_category_roundtrip() {
    for c in Category::all() {
        let s = c.as_str();
        assert_eq!(Category::from_str(s).unwrap(), *c, "Roundtrip failed for {s}");
        assert_eq!(format!("{c}"), s);
    }
}

// ── Month ─────────────────────────────────────────────────────

#[test]
fn test_month_parse() {
    let m = Month::from_str("2025-07").unwrap();
    assert_eq!(m, Month::new(2025, 7).unwrap());
    assert_eq!(m.to_string(), "2025-07");
}

#[test]
fn test_month_parse_rejects_malformed() {
    for bad in [
        "", "2025", "2025-7", "25-07", "2025-13", "2025-00", "2025/07", "2025-07-01", "abcd-ef",
        "+202-07",
    ] {
        assert_eq!(
            Month::from_str(bad),
            Err(ValidationError::InvalidMonth(bad.into())),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn test_month_next_prev_wrap_years() {
    let dec_2024 = Month::from_str("2024-12").unwrap();
    assert_eq!(dec_2024.next().to_string(), "2025-01");
    assert_eq!(dec_2024.next().prev(), dec_2024);

    let jan = Month::from_str("2025-01").unwrap();
    assert_eq!(jan.prev().to_string(), "2024-12");
    assert_eq!(Month::from_str("2025-06").unwrap().next().to_string(), "2025-07");
}

#[test]
fn test_month_contains_uses_calendar_fields() {
    let july = Month::from_str("2025-07").unwrap();
    assert!(july.contains(date(2025, 7, 1)));
    assert!(july.contains(date(2025, 7, 31)));
    assert!(!july.contains(date(2025, 6, 30)));
    assert!(!july.contains(date(2025, 8, 1)));
    assert!(!july.contains(date(2024, 7, 15)));
}

#[test]
fn test_month_of_date() {
    assert_eq!(Month::of(date(2025, 7, 31)), Month::new(2025, 7).unwrap());
}

#[test]
fn test_month_ordering() {
    let a = Month::from_str("2024-12").unwrap();
    let b = Month::from_str("2025-01").unwrap();
    assert!(a < b);
}

#[test]
fn test_month_label() {
    assert_eq!(Month::from_str("2025-07").unwrap().label(), "July 2025");
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_transaction_new() {
    let txn = Transaction::new(dec!(12.50), date(2025, 7, 4), "  Lunch ", Category::Food).unwrap();
    assert!(txn.id.is_none());
    assert_eq!(txn.description, "Lunch");
    assert_eq!(txn.month().to_string(), "2025-07");
}

#[test]
fn test_transaction_rejects_non_positive_amount() {
    assert_eq!(
        Transaction::new(Decimal::ZERO, date(2025, 7, 4), "x", Category::Food),
        Err(ValidationError::NonPositiveAmount(Decimal::ZERO))
    );
    assert_eq!(
        Transaction::new(dec!(-4.50), date(2025, 7, 4), "x", Category::Food),
        Err(ValidationError::NonPositiveAmount(dec!(-4.50)))
    );
}

#[test]
fn test_amounts_above_limit_are_rejected() {
    let limit = super::validation::MAX_AMOUNT;
    assert_eq!(limit, dec!(1000000000000000));
    assert!(Transaction::new(limit, date(2025, 7, 4), "x", Category::Food).is_ok());
    assert_eq!(
        Transaction::new(limit + dec!(0.01), date(2025, 7, 4), "x", Category::Food),
        Err(ValidationError::AmountTooLarge(dec!(1000000000000000.01)))
    );
    assert_eq!(
        Transaction::parse_line("2025-07-14 Food 79228162514264337593543950335 x"),
        Err(ValidationError::AmountTooLarge(Decimal::MAX))
    );
    assert_eq!(
        Budget::new(Category::Rent, Month::new(2025, 7).unwrap(), Decimal::MAX),
        Err(ValidationError::AmountTooLarge(Decimal::MAX))
    );
}

#[test]
fn test_transaction_rejects_blank_description() {
    assert_eq!(
        Transaction::new(dec!(1), date(2025, 7, 4), "   ", Category::Food),
        Err(ValidationError::EmptyDescription)
    );
}

#[test]
fn test_transaction_parse_line() {
    let txn = Transaction::parse_line("2025-07-14 food 1,250.75 Weekly groceries run").unwrap();
    assert_eq!(txn.date, date(2025, 7, 14));
    assert_eq!(txn.category, Category::Food);
    assert_eq!(txn.amount, dec!(1250.75));
    assert_eq!(txn.description, "Weekly groceries run");
}

#[test]
fn test_transaction_parse_line_tolerates_extra_spaces() {
    let txn = Transaction::parse_line("  2025-07-14   Rent   ₹500   July rent ").unwrap();
    assert_eq!(txn.category, Category::Rent);
    assert_eq!(txn.amount, dec!(500));
    assert_eq!(txn.description, "July rent");
}

#[test]
fn test_transaction_parse_line_reports_first_bad_field() {
    assert_eq!(
        Transaction::parse_line("07/14/2025 Food 5 x"),
        Err(ValidationError::InvalidDate("07/14/2025".into()))
    );
    assert_eq!(
        Transaction::parse_line("2025-07-14 Groceries 5 x"),
        Err(ValidationError::InvalidCategory("Groceries".into()))
    );
    assert_eq!(
        Transaction::parse_line("2025-07-14 Food five x"),
        Err(ValidationError::InvalidAmount("five".into()))
    );
    assert_eq!(
        Transaction::parse_line("2025-07-14 Food 0 x"),
        Err(ValidationError::NonPositiveAmount(Decimal::ZERO))
    );
    assert_eq!(
        Transaction::parse_line("2025-07-14 Food 5"),
        Err(ValidationError::EmptyDescription)
    );
    assert_eq!(
        Transaction::parse_line(""),
        Err(ValidationError::InvalidDate(String::new()))
    );
}

#[test]
fn test_transaction_to_line_roundtrip() {
    let txn = Transaction::new(dec!(42.10), date(2025, 2, 28), "Train ticket", Category::Travel)
        .unwrap();
    let back = Transaction::parse_line(&txn.to_line()).unwrap();
    assert_eq!(back, txn);
}

// ── Budget ────────────────────────────────────────────────────

#[test]
fn test_budget_new() {
    let month = Month::from_str("2025-07").unwrap();
    let budget = Budget::new(Category::Food, month, dec!(2000)).unwrap();
    assert!(budget.id.is_none());
    assert_eq!(budget.category, Category::Food);
    assert_eq!(budget.month, month);
    assert_eq!(budget.amount, dec!(2000));
}

#[test]
fn test_budget_rejects_non_positive_amount() {
    let month = Month::from_str("2025-07").unwrap();
    assert_eq!(
        Budget::new(Category::Food, month, Decimal::ZERO),
        Err(ValidationError::NonPositiveAmount(Decimal::ZERO))
    );
}
