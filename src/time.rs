use std::sync::RwLock;

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Clock abstracts access to the current wall-clock time so month-scoped
/// queries stay deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current local date. Defaults to `now().date()`.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Real-time clock backed by the system's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a caller-chosen instant. It can be moved forward with
/// [`FixedClock::set`], which lets tests record entries across months.
#[derive(Debug)]
pub struct FixedClock {
    instant: RwLock<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self {
            instant: RwLock::new(instant),
        }
    }

    /// Convenience constructor for noon on the given calendar date.
    pub fn on(date: NaiveDate) -> Self {
        Self::new(date.and_hms_opt(12, 0, 0).expect("noon is a valid time"))
    }

    pub fn set(&self, instant: NaiveDateTime) {
        match self.instant.write() {
            Ok(mut guard) => *guard = instant,
            Err(poisoned) => *poisoned.into_inner() = instant,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        match self.instant.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// Parses the `ACCOUNT_BOOK_FIXED_NOW` override used by scripted runs.
///
/// Accepts either `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_fixed_now(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(12, 0, 0))
        })
}
