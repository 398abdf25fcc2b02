use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// A single calendar month, used to bucket transactions by their recording date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthPeriod {
    pub year: i32,
    pub month: u32,
}

impl MonthPeriod {
    /// The month that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        first_of(self.year, self.month)
    }

    /// Last calendar day, found by stepping back one day from the first day of
    /// the following month. December rolls into January of the next year.
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        first_of(next_year, next_month) - Duration::days(1)
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant.year() == self.year && instant.month() == self.month
    }

    /// Renders the month as `"{month}/1 - {month}/{last day}"`, e.g. `2/1 - 2/29`.
    pub fn label(&self) -> String {
        format!("{m}/1 - {m}/{last}", m = self.month, last = self.last_day().day())
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

fn first_of(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("month derived from a valid date")
}
