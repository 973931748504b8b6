use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::SnapshotResult;
use crate::models::{InventoryItem, Snapshot};

/// On-disk layout of the snapshot file: two logical keys, the ordered item
/// collection and the name counter. The counter is stored as a decimal
/// integer string.
#[derive(Debug, Serialize, Deserialize, Default)]
struct SnapshotFile {
    #[serde(default)]
    inventory_items: Vec<InventoryItem>,
    #[serde(default)]
    item_counter: String,
}

/// Durable JSON snapshot of the ledger, written through on every mutation.
/// Reads are best-effort: anything missing or corrupt loads as the empty
/// default and never fails the caller.
#[derive(Debug)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Snapshot store at the default location under the platform data dir
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Snapshot store at an explicit path (used by tests)
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("inventory_ledger")
            .join("ledger_snapshot.json")
    }

    /// Load the persisted snapshot, or the empty default if there is none
    /// or it cannot be read.
    pub fn load(&self) -> Snapshot {
        if self.path.exists() {
            match std::fs::read_to_string(&self.path) {
                Ok(content) => match serde_json::from_str::<SnapshotFile>(&content) {
                    Ok(file) => {
                        let snapshot = Self::from_file(file);
                        log::info!(
                            "Loaded ledger snapshot with {} items (counter at {})",
                            snapshot.items.len(),
                            snapshot.counter
                        );
                        return snapshot;
                    }
                    Err(e) => {
                        log::warn!("Failed to parse snapshot file, starting fresh: {}", e);
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read snapshot file, starting fresh: {}", e);
                }
            }
        }
        log::info!("Starting with an empty ledger");
        Snapshot::default()
    }

    /// Save the snapshot to disk
    pub fn save(&self, snapshot: &Snapshot) -> SnapshotResult<()> {
        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = SnapshotFile {
            inventory_items: snapshot.items.clone(),
            item_counter: snapshot.counter.to_string(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        std::fs::write(&self.path, content)?;

        log::debug!("Saved ledger snapshot with {} items", snapshot.items.len());
        Ok(())
    }

    fn from_file(file: SnapshotFile) -> Snapshot {
        // A missing or malformed counter degrades to the default, same as a
        // missing file
        let counter = file.item_counter.parse::<u64>().unwrap_or(1).max(1);
        Snapshot {
            items: file.inventory_items,
            counter,
        }
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
