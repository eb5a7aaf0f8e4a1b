//! Stock API - Core Trait
//!
//! Abstract interface to the remote inventory service.
//! The browser client implements it over `fetch`, the CLI over `reqwest`.

use async_trait::async_trait;

use crate::error::StockResult;
use crate::models::{DisposalOutcome, Item, NewItem};

/// Remote calls the clients rely on.
///
/// `?Send` because the WASM implementation holds `JsValue`s across awaits.
#[async_trait(?Send)]
pub trait StockApi {
    /// GET /categories
    async fn list_categories(&self) -> StockResult<Vec<String>>;

    /// GET /locations
    async fn list_locations(&self) -> StockResult<Vec<String>>;

    /// GET /items
    async fn list_items(&self) -> StockResult<Vec<Item>>;

    /// POST /items
    async fn create_item(&self, item: &NewItem) -> StockResult<Item>;

    /// POST /items/{id}/dispose
    async fn dispose_item(&self, id: u32, outcome: DisposalOutcome) -> StockResult<()>;
}

#[async_trait(?Send)]
impl<A: StockApi + ?Sized> StockApi for &A {
    async fn list_categories(&self) -> StockResult<Vec<String>> {
        (**self).list_categories().await
    }

    async fn list_locations(&self) -> StockResult<Vec<String>> {
        (**self).list_locations().await
    }

    async fn list_items(&self) -> StockResult<Vec<Item>> {
        (**self).list_items().await
    }

    async fn create_item(&self, item: &NewItem) -> StockResult<Item> {
        (**self).create_item(item).await
    }

    async fn dispose_item(&self, id: u32, outcome: DisposalOutcome) -> StockResult<()> {
        (**self).dispose_item(id, outcome).await
    }
}
