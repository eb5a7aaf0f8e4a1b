//! Inventory Utilities
//!
//! Helper functions for rendering and reporting the item list.

use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::models::Item;
use crate::urgency::Expiry;

/// One table row: the item and how close it is to its DLC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    pub item: Item,
    pub expiry: Expiry,
}

/// Pair every item with its expiry, keeping the given order
pub fn inventory_rows(items: &[Item], now: NaiveDateTime) -> Vec<InventoryRow> {
    items
        .iter()
        .map(|item| InventoryRow {
            expiry: Expiry::compute(item.dlc, now),
            item: item.clone(),
        })
        .collect()
}

/// Order by DLC, then name
pub fn sort_for_display(items: &mut [Item]) {
    items.sort_by(|a, b| a.dlc.cmp(&b.dlc).then_with(|| a.name.cmp(&b.name)));
}

/// Perishable items whose DLC falls in `[today, today + days]`, soonest first
pub fn expiring_within(items: &[Item], today: NaiveDate, days: u32) -> Vec<Item> {
    // Windows past the end of the calendar run to its last day
    let limit = today
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX);
    let mut soon: Vec<Item> = items
        .iter()
        .filter(|item| item.perishable && item.dlc >= today && item.dlc <= limit)
        .cloned()
        .collect();
    sort_for_display(&mut soon);
    soon
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_item;
    use crate::urgency::Urgency;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_inventory_rows() {
        let items = vec![
            make_item(1, "Milk", "2024-01-09"),
            make_item(2, "Eggs", "2024-01-12"),
            make_item(3, "Rice", "2024-03-01"),
        ];
        let now = date("2024-01-10").and_hms_opt(8, 0, 0).unwrap();

        let rows = inventory_rows(&items, now);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].item.id, 1);
        assert_eq!(rows[0].expiry.urgency, Urgency::Expired);
        assert_eq!(rows[1].expiry.urgency, Urgency::Critical);
        assert_eq!(rows[1].expiry.label(), "1 days");
        assert_eq!(rows[2].expiry.urgency, Urgency::Ok);
    }

    #[test]
    fn test_sort_for_display() {
        let mut items = vec![
            make_item(1, "Yogurt", "2024-02-01"),
            make_item(2, "Butter", "2024-02-01"),
            make_item(3, "Cream", "2024-01-15"),
        ];
        sort_for_display(&mut items);
        let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_expiring_within() {
        let mut jam = make_item(5, "Jam", "2024-01-12");
        jam.perishable = false;
        let items = vec![
            make_item(1, "Old milk", "2024-01-09"),
            make_item(2, "Cheese", "2024-01-17"),
            make_item(3, "Ham", "2024-01-10"),
            make_item(4, "Rice", "2024-01-18"),
            jam,
        ];

        let soon = expiring_within(&items, date("2024-01-10"), 7);
        let ids: Vec<u32> = soon.iter().map(|i| i.id).collect();
        // Bounds inclusive, past and non-perishable excluded
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_expiring_within_zero_days() {
        let items = vec![
            make_item(1, "Ham", "2024-01-10"),
            make_item(2, "Cheese", "2024-01-11"),
        ];
        let soon = expiring_within(&items, date("2024-01-10"), 0);
        assert_eq!(soon.len(), 1);
        assert_eq!(soon[0].id, 1);
    }

    #[test]
    fn test_expiring_within_huge_window() {
        let items = vec![
            make_item(1, "Ham", "2024-01-10"),
            make_item(2, "Honey", "2099-12-31"),
        ];
        let soon = expiring_within(&items, date("2024-01-10"), u32::MAX);
        let ids: Vec<u32> = soon.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
