use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::ledger::Category;

/// Renders an amount with two decimal places behind the currency symbol.
/// Negative values put the minus sign before the symbol: `-$12.50`.
pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    let rounded = two_places(amount);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{symbol}{:.2}", rounded.abs())
    } else {
        format!("{symbol}{:.2}", rounded.abs())
    }
}

/// History-row amount: `+$1000.00` for income, `-$250.00` for paid.
/// The category alone decides the sign; `amount` contributes its magnitude.
pub fn format_signed(symbol: &str, category: Category, amount: Decimal) -> String {
    format!("{}{symbol}{:.2}", category.sign(), two_places(amount).abs())
}

/// Long-form date shown under the title, e.g. `October 05, 2025`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

pub fn format_row_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn two_places(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
