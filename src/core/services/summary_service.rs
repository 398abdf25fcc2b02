use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::format::{format_long_date, format_row_date};
use crate::ledger::{Category, Ledger, MonthPeriod};

/// Every figure the account book screen shows, computed in one pass of queries.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dashboard {
    pub today_label: String,
    pub year: i32,
    pub net_saving: Decimal,
    pub income: Decimal,
    pub paid: Decimal,
    pub month_range: String,
    pub month_net: Decimal,
    /// Current-month transactions, newest first.
    pub history: Vec<HistoryRow>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistoryRow {
    pub date: String,
    pub category: Category,
    /// Positive for income, negative for paid.
    pub signed_amount: Decimal,
    pub description: String,
}

pub struct SummaryService;

impl SummaryService {
    /// Snapshot relative to the ledger's own clock.
    pub fn current(ledger: &Ledger) -> Dashboard {
        Self::dashboard(ledger, ledger.today())
    }

    pub fn dashboard(ledger: &Ledger, today: NaiveDate) -> Dashboard {
        let history = ledger
            .transactions_in_month_of(today)
            .into_iter()
            .rev()
            .map(|txn| HistoryRow {
                date: format_row_date(txn.recorded_at().date()),
                category: txn.category(),
                signed_amount: txn.signed_amount(),
                description: txn.description().to_string(),
            })
            .collect();

        Dashboard {
            today_label: format_long_date(today),
            year: today.year(),
            net_saving: ledger.net_saving(),
            income: ledger.total_income(),
            paid: ledger.total_paid(),
            month_range: MonthPeriod::containing(today).label(),
            month_net: ledger.month_net(today),
            history,
        }
    }
}
