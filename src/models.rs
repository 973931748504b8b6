use serde::{Deserialize, Serialize};

/// One ledger line item. Immutable once created; correcting a mistake means
/// removing the item and re-adding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Creation-time id (epoch milliseconds, bumped on collision). The only
    /// stable key for removal.
    pub id: i64,

    /// Generated label "Item {n}" from the ledger-wide counter
    pub name: String,

    /// Quantity, strictly positive
    pub stock: f64,

    /// Unit price, strictly positive
    pub price: f64,

    /// stock * price, computed once at creation and stored
    pub total: f64,
}

/// Persisted state of the ledger: the ordered item collection plus the
/// name counter. This is exactly what survives a restart.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub items: Vec<InventoryItem>,
    pub counter: u64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            counter: 1,
        }
    }
}
