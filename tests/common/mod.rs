#![allow(dead_code)]

use account_book::{ledger::Ledger, time::FixedClock};
use chrono::{NaiveDate, NaiveDateTime};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, 0, 0)
        .expect("valid time of day")
}

/// Ledger whose clock is pinned to noon on the given day.
pub fn ledger_on(year: i32, month: u32, day: u32) -> Ledger {
    Ledger::with_clock(FixedClock::on(date(year, month, day)))
}
