pub mod entry_service;
pub mod summary_service;

pub use entry_service::{Entry, EntryService};
pub use summary_service::{Dashboard, HistoryRow, SummaryService};
