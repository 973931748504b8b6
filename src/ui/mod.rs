mod app;

pub use app::{launch_gui, LedgerApp};
