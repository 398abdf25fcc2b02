//! Text rendering of the account book screen.

use colored::Colorize;

use crate::core::{
    format::{format_amount, format_signed},
    services::{Dashboard, HistoryRow},
};
use crate::ledger::Category;

const COLUMN_WIDTH: usize = 15;
const RULE_WIDTH: usize = 48;

pub struct AccountBookView<'a> {
    title: &'a str,
    symbol: &'a str,
    color: bool,
}

impl<'a> AccountBookView<'a> {
    pub fn new(title: &'a str, symbol: &'a str, color: bool) -> Self {
        Self {
            title,
            symbol,
            color,
        }
    }

    /// Full screen: header, totals, monthly summary, then the history table.
    pub fn render(&self, dashboard: &Dashboard) -> Vec<String> {
        let mut lines = self.header(dashboard);
        lines.push(String::new());
        lines.extend(self.monthly(dashboard));
        lines.push(String::new());
        lines.extend(self.history(&dashboard.history));
        lines
    }

    pub fn header(&self, dashboard: &Dashboard) -> Vec<String> {
        let title = format!("=== {} ===", self.title);
        vec![
            self.paint(title, |s| s.bold().to_string()),
            dashboard.today_label.clone(),
            String::new(),
            two_column("NET SAVING", &format_amount(self.symbol, dashboard.net_saving)),
            format!(
                "INCOME {}    PAID {}",
                format_amount(self.symbol, dashboard.income),
                format_amount(self.symbol, dashboard.paid)
            ),
        ]
    }

    pub fn monthly(&self, dashboard: &Dashboard) -> Vec<String> {
        vec![
            format!("--- {} ---", dashboard.year),
            two_column(
                &dashboard.month_range,
                &format_amount(self.symbol, dashboard.month_net),
            ),
        ]
    }

    pub fn history(&self, rows: &[HistoryRow]) -> Vec<String> {
        let mut lines = vec![format!(
            "{:<w$}{:<w$}{}",
            "DATE",
            "INCOME/PAID",
            "DESCRIPTION",
            w = COLUMN_WIDTH
        )];
        if rows.is_empty() {
            lines.push("(no transactions this month)".to_string());
            return lines;
        }
        for row in rows {
            let amount = format!(
                "{:<w$}",
                format_signed(self.symbol, row.category, row.signed_amount),
                w = COLUMN_WIDTH
            );
            let amount = match row.category {
                Category::Income => self.paint(amount, |s| s.magenta().to_string()),
                Category::Paid => self.paint(amount, |s| s.dimmed().to_string()),
            };
            lines.push(format!(
                "{:<w$}{}{}",
                row.date,
                amount,
                row.description,
                w = COLUMN_WIDTH
            ));
        }
        lines
    }

    fn paint(&self, text: String, style: impl Fn(&str) -> String) -> String {
        if self.color {
            style(&text)
        } else {
            text
        }
    }
}

fn two_column(label: &str, value: &str) -> String {
    let width = RULE_WIDTH.saturating_sub(value.len());
    format!("{:<width$}{}", label, value, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::SummaryService;
    use crate::ledger::Ledger;
    use crate::time::FixedClock;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn dashboard() -> Dashboard {
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let mut ledger = Ledger::with_clock(FixedClock::on(today));
        ledger.record(Decimal::from(1000), Category::Income, "Salary");
        ledger.record(Decimal::from(250), Category::Paid, "Groceries");
        SummaryService::current(&ledger)
    }

    #[test]
    fn renders_plain_account_book() {
        let view = AccountBookView::new("account book", "$", false);
        let lines = view.render(&dashboard());

        assert_eq!(lines[0], "=== account book ===");
        assert_eq!(lines[1], "February 10, 2024");
        assert!(lines[3].starts_with("NET SAVING"));
        assert!(lines[3].ends_with("$750.00"));
        assert_eq!(lines[3].len(), RULE_WIDTH);
        assert_eq!(lines[4], "INCOME $1000.00    PAID $250.00");
        assert_eq!(lines[6], "--- 2024 ---");
        assert!(lines[7].starts_with("2/1 - 2/29"));
        assert_eq!(
            lines[10],
            format!("{:<15}{:<15}{}", "2024-02-10", "-$250.00", "Groceries")
        );
        assert_eq!(
            lines[11],
            format!("{:<15}{:<15}{}", "2024-02-10", "+$1000.00", "Salary")
        );
    }

    #[test]
    fn empty_history_has_placeholder() {
        let view = AccountBookView::new("account book", "$", false);
        let lines = view.history(&[]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "(no transactions this month)");
    }
}
