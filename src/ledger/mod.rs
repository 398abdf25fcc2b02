//! Ledger model: transactions, month periods, and the aggregate queries.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod period;
pub mod transaction;

pub use ledger::Ledger;
pub use period::MonthPeriod;
pub use transaction::{Category, Transaction};
