//! Reference Commands
//!
//! Category and location vocabularies.

use stock_core::{ApiConfig, StockResult};

use super::{read_json, send};

pub async fn list_categories(config: &ApiConfig) -> StockResult<Vec<String>> {
    let resp = send("GET", &config.url("categories"), None).await?;
    read_json(resp).await
}

pub async fn list_locations(config: &ApiConfig) -> StockResult<Vec<String>> {
    let resp = send("GET", &config.url("locations"), None).await?;
    read_json(resp).await
}
