use chrono::Utc;

use crate::error::ValidationError;
use crate::models::{InventoryItem, Snapshot};
use crate::persistence::SnapshotStore;
use crate::validation::validate_entry;

/// The ledger itself: the ordered line-item collection, the name counter, and
/// the snapshot store it writes through to on every mutation.
///
/// Insertion order is the canonical display order; every derived view
/// (search, pagination, summary, export) is computed from `items()`.
#[derive(Debug)]
pub struct ItemStore {
    items: Vec<InventoryItem>,
    counter: u64,
    last_id: i64,
    persistence: SnapshotStore,
}

impl ItemStore {
    /// Open the ledger, hydrating items and counter from the snapshot store.
    /// A missing or unreadable snapshot yields an empty ledger.
    pub fn open(persistence: SnapshotStore) -> Self {
        let snapshot = persistence.load();
        let last_id = snapshot.items.iter().map(|item| item.id).max().unwrap_or(0);
        Self {
            items: snapshot.items,
            counter: snapshot.counter,
            last_id,
            persistence,
        }
    }

    /// Validate the raw entry fields and append a new line item.
    ///
    /// On success the item's total is fixed at `stock * price`, the name
    /// counter advances, and the snapshot is written through. On failure the
    /// ledger is unchanged.
    pub fn add(
        &mut self,
        raw_stock: &str,
        raw_price: &str,
    ) -> Result<&InventoryItem, ValidationError> {
        let (stock, price) = validate_entry(raw_stock, raw_price)?;

        let item = InventoryItem {
            id: self.allocate_id(),
            name: format!("Item {}", self.counter),
            stock,
            price,
            total: stock * price,
        };
        log::debug!("Adding {} ({} items in ledger)", item.name, self.items.len() + 1);
        self.counter += 1;
        self.items.push(item);
        self.persist();

        Ok(self.items.last().expect("item was just pushed"))
    }

    /// Remove the item with the given id. Removing an absent id is a no-op,
    /// not an error; the snapshot is written through either way.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|item| item.id != id);
        self.persist();
    }

    /// The full collection in insertion order
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Sum of line-item totals; 0.0 for an empty ledger
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|item| item.total).sum()
    }

    /// Next value of the name counter (strictly increasing, never reused)
    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current persisted state of the ledger
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            items: self.items.clone(),
            counter: self.counter,
        }
    }

    /// Creation-time id: epoch milliseconds, bumped past the previous id so
    /// two adds within the same millisecond stay distinct.
    fn allocate_id(&mut self) -> i64 {
        let id = Utc::now().timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id
    }

    /// Write-through: best-effort, the in-memory ledger stays authoritative
    /// for the session if the write fails.
    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.snapshot()) {
            log::warn!("Failed to save ledger snapshot: {}", e);
        }
    }
}
