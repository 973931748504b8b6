use crate::models::InventoryItem;

/// The sidebar's numbers in one place
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SummaryStats {
    pub item_count: usize,
    pub total_value: f64,
    pub average_price: f64,
}

impl SummaryStats {
    pub fn compute(items: &[InventoryItem]) -> Self {
        Self {
            item_count: items.len(),
            total_value: total_value(items),
            average_price: average_price(items),
        }
    }
}

/// Sum of line-item totals over a view
pub fn total_value(items: &[InventoryItem]) -> f64 {
    items.iter().map(|item| item.total).sum()
}

/// Total value divided by total stock. An empty view (or zero total stock)
/// reports 0.0 instead of dividing by zero.
pub fn average_price(items: &[InventoryItem]) -> f64 {
    let stock_sum: f64 = items.iter().map(|item| item.stock).sum();
    if stock_sum == 0.0 {
        return 0.0;
    }
    total_value(items) / stock_sum
}

/// Value distribution: the first `n` items in store order, each paired with
/// its percentage of the view's total value. Shares are 0.0 when the total
/// is zero.
pub fn top_share(items: &[InventoryItem], n: usize) -> Vec<(InventoryItem, f64)> {
    let total = total_value(items);
    items
        .iter()
        .take(n)
        .map(|item| {
            let share = if total == 0.0 {
                0.0
            } else {
                item.total / total * 100.0
            };
            (item.clone(), share)
        })
        .collect()
}
