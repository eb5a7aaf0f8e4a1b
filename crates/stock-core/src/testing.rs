//! In-memory StockApi used by the unit tests.

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::StockApi;
use crate::error::{StockError, StockResult};
use crate::models::{DisposalOutcome, Item, NewItem};

pub fn make_item(id: u32, name: &str, dlc: &str) -> Item {
    Item {
        id,
        name: name.to_string(),
        category: "Dairy".to_string(),
        perishable: true,
        dlc: NaiveDate::parse_from_str(dlc, "%Y-%m-%d").unwrap(),
        location: "Fridge".to_string(),
        created_at: "2024-01-01 00:00:00".to_string(),
    }
}

/// Records every call and serves canned responses
#[derive(Default)]
pub struct MockApi {
    categories: Vec<String>,
    locations: Vec<String>,
    items: RefCell<Vec<Item>>,
    next_id: RefCell<u32>,
    calls: RefCell<Vec<String>>,
    categories_error: RefCell<Option<String>>,
    locations_error: RefCell<Option<String>>,
    items_error: RefCell<Option<String>>,
    create_error: RefCell<Option<String>>,
    dispose_error: RefCell<Option<String>>,
}

impl MockApi {
    pub fn with_references(categories: &[&str], locations: &[&str]) -> Self {
        Self {
            categories: categories.iter().map(|s| s.to_string()).collect(),
            locations: locations.iter().map(|s| s.to_string()).collect(),
            next_id: RefCell::new(1),
            ..Default::default()
        }
    }

    pub fn seed_items(&self, items: Vec<Item>) {
        let max = items.iter().map(|i| i.id).max().unwrap_or(0);
        *self.next_id.borrow_mut() = max + 1;
        *self.items.borrow_mut() = items;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn fail_categories(&self, msg: &str) {
        *self.categories_error.borrow_mut() = Some(msg.to_string());
    }

    pub fn fail_locations(&self, msg: &str) {
        *self.locations_error.borrow_mut() = Some(msg.to_string());
    }

    pub fn fail_items(&self, msg: &str) {
        *self.items_error.borrow_mut() = Some(msg.to_string());
    }

    pub fn fail_create(&self, msg: &str) {
        *self.create_error.borrow_mut() = Some(msg.to_string());
    }

    pub fn fail_dispose(&self, msg: &str) {
        *self.dispose_error.borrow_mut() = Some(msg.to_string());
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn check(slot: &RefCell<Option<String>>) -> StockResult<()> {
        match slot.borrow().as_deref() {
            Some(msg) => Err(StockError::Remote(msg.to_string())),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl StockApi for MockApi {
    async fn list_categories(&self) -> StockResult<Vec<String>> {
        self.record("GET /categories".to_string());
        Self::check(&self.categories_error)?;
        Ok(self.categories.clone())
    }

    async fn list_locations(&self) -> StockResult<Vec<String>> {
        self.record("GET /locations".to_string());
        Self::check(&self.locations_error)?;
        Ok(self.locations.clone())
    }

    async fn list_items(&self) -> StockResult<Vec<Item>> {
        self.record("GET /items".to_string());
        Self::check(&self.items_error)?;
        Ok(self.items.borrow().clone())
    }

    async fn create_item(&self, item: &NewItem) -> StockResult<Item> {
        self.record("POST /items".to_string());
        Self::check(&self.create_error)?;
        let id = {
            let mut next = self.next_id.borrow_mut();
            let id = *next;
            *next += 1;
            id
        };
        let created = Item {
            id,
            name: item.name.clone(),
            category: item.category.clone(),
            perishable: item.perishable,
            dlc: item.dlc,
            location: item.location.clone(),
            created_at: "2024-01-01 12:00:00".to_string(),
        };
        self.items.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn dispose_item(&self, id: u32, outcome: DisposalOutcome) -> StockResult<()> {
        self.record(format!("POST /items/{}/dispose {}", id, outcome.as_str()));
        Self::check(&self.dispose_error)?;
        self.items.borrow_mut().retain(|i| i.id != id);
        Ok(())
    }
}
