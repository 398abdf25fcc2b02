//! Invariants of the ledger that must hold for any sequence of entries.

mod common;

use account_book::ledger::{Category, Ledger, MonthPeriod};
use chrono::Duration;
use common::{at, date, ledger_on};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![Just(Category::Income), Just(Category::Paid)]
}

fn entries_strategy() -> impl Strategy<Value = Vec<(i64, Category, i64)>> {
    // (amount in cents, category, offset in hours from the reference instant)
    prop::collection::vec(
        (-100_000i64..1_000_000i64, category_strategy(), -2_000i64..2_000i64),
        0..40,
    )
}

proptest! {
    #[test]
    fn net_saving_is_income_minus_paid(entries in entries_strategy()) {
        let mut ledger = ledger_on(2024, 3, 15);
        for (cents, category, _) in &entries {
            ledger.record(Decimal::new(*cents, 2), *category, "entry");
        }
        prop_assert_eq!(ledger.total_income() - ledger.total_paid(), ledger.net_saving());
    }

    #[test]
    fn recording_never_alters_earlier_transactions(entries in entries_strategy()) {
        let mut ledger = ledger_on(2024, 3, 15);
        let mut snapshots = Vec::new();
        for (idx, (cents, category, hours)) in entries.iter().enumerate() {
            let when = at(2024, 3, 15, 12) + Duration::hours(*hours);
            ledger.record_at(Decimal::new(*cents, 2), *category, format!("entry {idx}"), when);
            prop_assert_eq!(&ledger.transactions()[..snapshots.len()], &snapshots[..]);
            snapshots = ledger.transactions().to_vec();
        }
        prop_assert_eq!(ledger.len(), entries.len());
    }

    #[test]
    fn month_filter_matches_calendar_month(entries in entries_strategy()) {
        let mut ledger = ledger_on(2024, 3, 15);
        for (cents, category, hours) in &entries {
            let when = at(2024, 3, 15, 12) + Duration::hours(*hours * 6);
            ledger.record_at(Decimal::new(*cents, 2), *category, "entry", when);
        }

        let march = MonthPeriod::containing(date(2024, 3, 1));
        let expected: Vec<_> = ledger
            .transactions()
            .iter()
            .filter(|txn| march.contains(txn.recorded_at()))
            .collect();
        let monthly = ledger.transactions_in_current_month();
        prop_assert_eq!(&monthly, &expected);
        for txn in &monthly {
            prop_assert_eq!(MonthPeriod::containing(txn.recorded_at().date()), march);
        }

        let monthly_net: Decimal = monthly.iter().map(|txn| txn.signed_amount()).sum();
        prop_assert_eq!(ledger.current_month_net(), monthly_net);
    }
}

#[test]
fn scenario_salary_and_groceries() {
    let mut ledger = ledger_on(2024, 2, 10);
    ledger.record(Decimal::from(1000), Category::Income, "Salary");
    ledger.record(Decimal::from(250), Category::Paid, "Groceries");

    assert_eq!(ledger.total_income(), Decimal::from(1000));
    assert_eq!(ledger.total_paid(), Decimal::from(250));
    assert_eq!(ledger.net_saving(), Decimal::from(750));
}

#[test]
fn scenario_empty_ledger() {
    let ledger = Ledger::new();
    assert_eq!(ledger.net_saving(), Decimal::ZERO);
    assert_eq!(ledger.total_income(), Decimal::ZERO);
    assert_eq!(ledger.total_paid(), Decimal::ZERO);
    assert!(ledger.transactions_in_current_month().is_empty());
}

#[test]
fn scenario_range_labels() {
    assert_eq!(Ledger::month_range_label(date(2024, 2, 10)), "2/1 - 2/29");
    assert_eq!(Ledger::month_range_label(date(2023, 2, 10)), "2/1 - 2/28");
    assert_eq!(Ledger::month_range_label(date(2023, 9, 30)), "9/1 - 9/30");
    assert_eq!(Ledger::month_range_label(date(2023, 12, 1)), "12/1 - 12/31");
}

#[test]
fn scenario_previous_month_is_excluded() {
    let mut ledger = ledger_on(2024, 2, 10);
    ledger.record_at(Decimal::from(80), Category::Paid, "January bill", at(2024, 1, 20, 9));
    ledger.record(Decimal::from(30), Category::Income, "February gift");

    let monthly = ledger.transactions_in_current_month();
    assert_eq!(monthly.len(), 1);
    assert_eq!(monthly[0].description(), "February gift");
}

#[test]
fn reversed_month_view_is_newest_first() {
    let mut ledger = ledger_on(2024, 5, 20);
    ledger.record_at(Decimal::from(1), Category::Income, "first", at(2024, 5, 1, 8));
    ledger.record_at(Decimal::from(2), Category::Paid, "second", at(2024, 5, 2, 8));
    ledger.record_at(Decimal::from(3), Category::Income, "third", at(2024, 5, 3, 8));

    let newest_first: Vec<&str> = ledger
        .transactions_in_current_month()
        .into_iter()
        .rev()
        .map(|txn| txn.description())
        .collect();
    assert_eq!(newest_first, vec!["third", "second", "first"]);
}

#[test]
fn same_month_of_another_year_is_excluded() {
    let mut ledger = ledger_on(2024, 5, 20);
    ledger.record_at(Decimal::from(9), Category::Income, "last May", at(2023, 5, 20, 8));
    assert!(ledger.transactions_in_current_month().is_empty());
    assert_eq!(ledger.current_month_net(), Decimal::ZERO);
    assert_eq!(ledger.net_saving(), Decimal::from(9));
}
