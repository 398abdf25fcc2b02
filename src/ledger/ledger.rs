use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::{
    period::MonthPeriod,
    transaction::{Category, Transaction},
};
use crate::time::{Clock, SystemClock};

/// Session-scoped, append-only record of income and expense entries.
///
/// Month-scoped queries take "now" from the ledger's [`Clock`]; each one also
/// has a variant accepting an explicit reference date.
pub struct Ledger {
    transactions: Vec<Transaction>,
    clock: Box<dyn Clock>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            transactions: Vec::new(),
            clock: Box::new(clock),
        }
    }

    /// Appends a transaction stamped with the clock's current time.
    ///
    /// The amount is not sign-checked; input validation belongs to the caller.
    pub fn record(&mut self, amount: Decimal, category: Category, description: impl Into<String>) {
        let now = self.clock.now();
        self.record_at(amount, category, description, now);
    }

    /// Appends a transaction with an explicit recording time.
    pub fn record_at(
        &mut self,
        amount: Decimal,
        category: Category,
        description: impl Into<String>,
        recorded_at: NaiveDateTime,
    ) {
        let transaction = Transaction::new(amount, category, description, recorded_at);
        tracing::debug!(
            %amount,
            %category,
            recorded_at = %recorded_at,
            "transaction recorded"
        );
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn total_income(&self) -> Decimal {
        sum_category(self.transactions.iter(), Category::Income)
    }

    pub fn total_paid(&self) -> Decimal {
        sum_category(self.transactions.iter(), Category::Paid)
    }

    /// Total income minus total paid. May be negative.
    pub fn net_saving(&self) -> Decimal {
        self.total_income().saturating_sub(self.total_paid())
    }

    pub fn current_month_range_label(&self) -> String {
        Self::month_range_label(self.today())
    }

    /// Range label for the month containing `date`, e.g. `"10/1 - 10/31"`.
    pub fn month_range_label(date: NaiveDate) -> String {
        MonthPeriod::containing(date).label()
    }

    /// Transactions recorded in the current calendar month, oldest first.
    pub fn transactions_in_current_month(&self) -> Vec<&Transaction> {
        self.transactions_in_month_of(self.today())
    }

    /// Transactions sharing calendar month and year with `reference`, in
    /// insertion order. Reverse the result for newest-first display.
    pub fn transactions_in_month_of(&self, reference: NaiveDate) -> Vec<&Transaction> {
        let period = MonthPeriod::containing(reference);
        self.transactions
            .iter()
            .filter(|txn| period.contains(txn.recorded_at()))
            .collect()
    }

    pub fn current_month_net(&self) -> Decimal {
        self.month_net(self.today())
    }

    pub fn month_net(&self, reference: NaiveDate) -> Decimal {
        let monthly = self.transactions_in_month_of(reference);
        let income = sum_category(monthly.iter().copied(), Category::Income);
        let paid = sum_category(monthly.iter().copied(), Category::Paid);
        income.saturating_sub(paid)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("transactions", &self.transactions)
            .finish_non_exhaustive()
    }
}

/// Sums one category, clamping at `Decimal::MAX`/`MIN` instead of overflowing.
fn sum_category<'a>(
    transactions: impl Iterator<Item = &'a Transaction>,
    category: Category,
) -> Decimal {
    transactions
        .filter(|txn| txn.category() == category)
        .fold(Decimal::ZERO, |total, txn| total.saturating_add(txn.amount()))
}
