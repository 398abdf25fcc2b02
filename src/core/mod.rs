//! Caller-side services layered over the ledger: entry validation, dashboard
//! snapshots, and presentation formatting.

pub mod format;
pub mod services;
