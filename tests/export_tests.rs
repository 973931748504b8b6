use chrono::{Local, NaiveDate, TimeZone};
use inventory_ledger::export;
use inventory_ledger::models::InventoryItem;

fn item(id: i64, name: &str, stock: f64, price: f64) -> InventoryItem {
    InventoryItem {
        id,
        name: name.to_string(),
        stock,
        price,
        total: stock * price,
    }
}

// CSV export

#[test]
fn test_csv_matches_the_documented_format_exactly() {
    let items = vec![item(1, "Item 1", 5.0, 2.0), item(2, "Item 2", 3.0, 4.0)];

    let csv = export::to_csv(&items);
    assert_eq!(
        csv,
        "Name,Quantity,Price,Total Value\n\
         Item 1,5,2.00,10.00\n\
         Item 2,3,4.00,12.00\n"
    );
}

#[test]
fn test_csv_of_an_empty_ledger_is_just_the_header() {
    let csv = export::to_csv(&[]);
    assert_eq!(csv, "Name,Quantity,Price,Total Value\n");
}

#[test]
fn test_csv_keeps_fractional_quantities_and_store_order() {
    let items = vec![item(1, "Item 1", 2.5, 3.0), item(2, "Item 2", 1.0, 0.1)];

    let csv = export::to_csv(&items);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[1], "Item 1,2.5,3.00,7.50");
    assert_eq!(lines[2], "Item 2,1,0.10,0.10");
}

// HTML report

#[test]
fn test_report_embeds_summary_and_total_row() {
    let items = vec![item(1, "Item 1", 5.0, 2.0), item(2, "Item 2", 3.0, 4.0)];
    let generated_at = Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();

    let html = export::to_html_report(&items, generated_at);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<style>"));
    assert!(html.contains("Generated: 2024-03-01 09:30"));
    assert!(html.contains("2 items"));
    assert!(html.contains("Total Value: $22.00"));
    assert!(html.contains("<td>Item 1</td><td>5</td><td>$2.00</td><td>$10.00</td>"));
    assert!(html.contains("<td>Item 2</td><td>3</td><td>$4.00</td><td>$12.00</td>"));
    assert!(html.contains("Total Inventory Value:</td><td>$22.00"));
}

#[test]
fn test_report_is_deterministic_for_fixed_inputs() {
    let items = vec![item(1, "Item 1", 5.0, 2.0)];
    let generated_at = Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();

    let first = export::to_html_report(&items, generated_at);
    let second = export::to_html_report(&items, generated_at);
    assert_eq!(first, second);
}

// Filenames

#[test]
fn test_export_filenames_carry_the_iso_date() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert_eq!(
        export::csv_export_filename(date),
        "inventory_data_2024-03-01.csv"
    );
    assert_eq!(
        export::html_report_filename(date),
        "inventory_report_2024-03-01.html"
    );
}
