use chrono::{DateTime, Local, NaiveDate};

use crate::models::InventoryItem;
use crate::summary;

/// Serialize a view to CSV text: header plus one row per item, in store
/// order, no trailing summary row. Price and total carry exactly two
/// decimals; quantity keeps its plain number form.
///
/// Quoting is disabled: fields are joined by a bare comma. Names are
/// system-generated ("Item {n}") and cannot contain the delimiter.
pub fn to_csv(items: &[InventoryItem]) -> String {
    use csv::{QuoteStyle, WriterBuilder};

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(vec![]);

    let _ = wtr.write_record(["Name", "Quantity", "Price", "Total Value"]);

    for item in items {
        let _ = wtr.write_record([
            item.name.as_str(),
            &item.stock.to_string(),
            &format!("{:.2}", item.price),
            &format!("{:.2}", item.total),
        ]);
    }

    let data = wtr.into_inner().unwrap();
    String::from_utf8(data).unwrap()
}

/// Render a view as a self-contained HTML report: inline styling, a summary
/// line (generation date, item count, total value), the item table with the
/// CSV's columns, and a bolded total row. Deterministic for the same items
/// and timestamp.
pub fn to_html_report(items: &[InventoryItem], generated_at: DateTime<Local>) -> String {
    let total_value = summary::total_value(items);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Inventory Report</title>\n");
    html.push_str("<style>\n");
    html.push_str("body { font-family: sans-serif; margin: 2em; color: #333; }\n");
    html.push_str("table { border-collapse: collapse; width: 100%; margin-top: 1em; }\n");
    html.push_str("th, td { border: 1px solid #ddd; padding: 8px 12px; text-align: right; }\n");
    html.push_str("th:first-child, td:first-child { text-align: left; }\n");
    html.push_str("th { background: #f5f2ea; }\n");
    html.push_str("tfoot td { font-weight: bold; }\n");
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str("<h1>Inventory Report</h1>\n");
    html.push_str(&format!(
        "<p>Generated: {} &mdash; {} items &mdash; Total Value: ${:.2}</p>\n",
        generated_at.format("%Y-%m-%d %H:%M"),
        items.len(),
        total_value
    ));

    html.push_str("<table>\n<thead>\n<tr>");
    html.push_str("<th>Name</th><th>Quantity</th><th>Price</th><th>Total Value</th>");
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for item in items {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>${:.2}</td><td>${:.2}</td></tr>\n",
            item.name, item.stock, item.price, item.total
        ));
    }

    html.push_str("</tbody>\n<tfoot>\n");
    html.push_str(&format!(
        "<tr><td colspan=\"3\">Total Inventory Value:</td><td>${:.2}</td></tr>\n",
        total_value
    ));
    html.push_str("</tfoot>\n</table>\n</body>\n</html>\n");

    html
}

/// `inventory_data_<ISO-date>.csv`
pub fn csv_export_filename(date: NaiveDate) -> String {
    format!("inventory_data_{}.csv", date.format("%Y-%m-%d"))
}

/// `inventory_report_<ISO-date>.html`
pub fn html_report_filename(date: NaiveDate) -> String {
    format!("inventory_report_{}.html", date.format("%Y-%m-%d"))
}
