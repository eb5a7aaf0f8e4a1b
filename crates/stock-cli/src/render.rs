//! Plain-text rendering for terminal output

use chrono::NaiveDateTime;

use stock_core::{inventory_rows, Item, References};

/// Item table with an urgency column
pub fn item_table(items: &[Item], now: NaiveDateTime) -> String {
    if items.is_empty() {
        return "No items.\n".to_string();
    }
    let mut out = format!(
        "{:<5} {:<30} {:<20} {:<16} {:<10} {:<10} {}\n",
        "ID", "Name", "Category", "Location", "Perishable", "DLC", "Status"
    );
    out.push_str(&"-".repeat(104));
    out.push('\n');
    for row in inventory_rows(items, now) {
        let item = &row.item;
        out.push_str(&format!(
            "{:<5} {:<30} {:<20} {:<16} {:<10} {:<10} {} [{}]\n",
            item.id,
            item.name,
            item.category,
            item.location,
            if item.perishable { "yes" } else { "no" },
            item.dlc.to_string(),
            row.expiry.label(),
            row.expiry.urgency.as_str(),
        ));
    }
    out
}

/// Output of `check`
pub fn expiring_report(items: &[Item], days: u32) -> String {
    if items.is_empty() {
        return format!("No item expires in the next {} day(s).\n", days);
    }
    let mut out = format!("{} item(s) expire in the next {} day(s):\n", items.len(), days);
    for item in items {
        out.push_str(&format!(
            "- {} ({} @ {}) DLC {}\n",
            item.name, item.category, item.location, item.dlc
        ));
    }
    out
}

pub fn references(refs: &References) -> String {
    format!(
        "Categories: {}\nLocations: {}\n",
        refs.categories.join(", "),
        refs.locations.join(", ")
    )
}
