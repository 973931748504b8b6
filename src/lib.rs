//! Single-user inventory ledger.
//!
//! The user enters a stock quantity and a unit price; the ledger derives the
//! line-item value, keeps the running list, and offers search, pagination,
//! an aggregate summary, and CSV/HTML export. State is written through to a
//! JSON snapshot on every mutation and hydrated again on startup.

pub mod error;
pub mod export;
pub mod models;
pub mod pagination;
pub mod persistence;
pub mod search;
pub mod store;
pub mod summary;
pub mod ui;
pub mod validation;

// Re-export commonly used items
pub use error::{SnapshotError, SnapshotResult, ValidationError};
pub use export::{csv_export_filename, html_report_filename, to_csv, to_html_report};
pub use models::{InventoryItem, Snapshot};
pub use pagination::DEFAULT_PAGE_SIZE;
pub use persistence::SnapshotStore;
pub use store::ItemStore;
pub use summary::SummaryStats;
pub use validation::validate_entry;
