use crate::models::InventoryItem;

/// Filter the view by a free-text query.
///
/// An empty query returns the items unchanged. Otherwise an item matches when
/// the lower-cased query is a substring of its lower-cased name, or of the
/// display string of its stock, price, or total (OR across the four fields).
/// The filter is stable: source order is preserved.
pub fn apply(items: &[InventoryItem], query: &str) -> Vec<InventoryItem> {
    if query.is_empty() {
        return items.to_vec();
    }

    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| item_matches(item, &query))
        .cloned()
        .collect()
}

fn item_matches(item: &InventoryItem, query: &str) -> bool {
    item.name.to_lowercase().contains(query)
        || item.stock.to_string().contains(query)
        || item.price.to_string().contains(query)
        || item.total.to_string().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, stock: f64, price: f64) -> InventoryItem {
        InventoryItem {
            id: 1,
            name: name.to_string(),
            stock,
            price,
            total: stock * price,
        }
    }

    #[test]
    fn empty_query_is_identity() {
        let items = vec![item("Item 1", 5.0, 2.0), item("Item 2", 3.0, 4.0)];
        assert_eq!(apply(&items, ""), items);
    }

    #[test]
    fn matches_name_case_insensitively() {
        let items = vec![item("Item 1", 5.0, 2.0), item("Item 2", 3.0, 4.0)];
        let filtered = apply(&items, "ITEM 2");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Item 2");
    }

    #[test]
    fn matches_any_numeric_field() {
        let items = vec![item("Item 1", 5.0, 2.0), item("Item 2", 3.0, 4.5)];

        // "5" hits Item 1's stock "5" and Item 2's price "4.5" / total "13.5"
        assert_eq!(apply(&items, "5").len(), 2);
        // stock only
        let by_stock = apply(&items, "3");
        assert_eq!(by_stock.len(), 1);
        assert_eq!(by_stock[0].name, "Item 2");
        // price
        assert_eq!(apply(&items, "4.5")[0].name, "Item 2");
        // total: 3 * 4.5 = 13.5
        assert_eq!(apply(&items, "13.5")[0].name, "Item 2");
    }

    #[test]
    fn preserves_source_order() {
        let items = vec![
            item("Item 1", 1.0, 1.0),
            item("Item 2", 1.0, 2.0),
            item("Item 3", 1.0, 3.0),
        ];
        let filtered = apply(&items, "item");
        let names: Vec<_> = filtered.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Item 1", "Item 2", "Item 3"]);
    }

    #[test]
    fn no_match_yields_empty_view() {
        let items = vec![item("Item 1", 5.0, 2.0)];
        assert!(apply(&items, "widget").is_empty());
    }
}
