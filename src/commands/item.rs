//! Item Commands
//!
//! Frontend bindings for the item endpoints.

use stock_core::{ApiConfig, DisposalOutcome, DisposalRequest, Item, NewItem, StockResult};

use super::{encode, read_json, send};

pub async fn list_items(config: &ApiConfig) -> StockResult<Vec<Item>> {
    let resp = send("GET", &config.url("items"), None).await?;
    read_json(resp).await
}

pub async fn create_item(config: &ApiConfig, new_item: &NewItem) -> StockResult<Item> {
    let body = encode(new_item)?;
    let resp = send("POST", &config.url("items"), Some(&body)).await?;
    read_json(resp).await
}

/// The acknowledgement body is ignored
pub async fn dispose_item(
    config: &ApiConfig,
    id: u32,
    outcome: DisposalOutcome,
) -> StockResult<()> {
    let body = encode(&DisposalRequest { outcome })?;
    send("POST", &config.dispose_url(id), Some(&body)).await?;
    Ok(())
}
