//! HTTP API Client
//!
//! `StockApi` over reqwest, for the native CLI.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use stock_core::{
    ApiConfig, DisposalOutcome, DisposalRequest, Item, NewItem, StockApi, StockError, StockResult,
};

/// GET /health response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthReport {
    pub db_path: String,
    pub db_exists: bool,
}

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn health(&self) -> StockResult<HealthReport> {
        self.get_json("health").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> StockResult<T> {
        let resp = send(self.client.get(self.config.url(path))).await?;
        read_json(resp).await
    }
}

/// Send a request, turning transport errors and non-2xx statuses into `Remote`
async fn send(request: RequestBuilder) -> StockResult<Response> {
    let resp = request
        .send()
        .await
        .map_err(|e| StockError::Remote(e.to_string()))?;
    let status = resp.status();
    debug!(url = %resp.url(), status = status.as_u16(), "response");
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(StockError::from_response(status.as_u16(), &body))
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> StockResult<T> {
    resp.json::<T>()
        .await
        .map_err(|e| StockError::Remote(format!("Invalid response: {}", e)))
}

#[async_trait(?Send)]
impl StockApi for HttpApi {
    async fn list_categories(&self) -> StockResult<Vec<String>> {
        self.get_json("categories").await
    }

    async fn list_locations(&self) -> StockResult<Vec<String>> {
        self.get_json("locations").await
    }

    async fn list_items(&self) -> StockResult<Vec<Item>> {
        self.get_json("items").await
    }

    async fn create_item(&self, item: &NewItem) -> StockResult<Item> {
        let resp = send(self.client.post(self.config.url("items")).json(item)).await?;
        read_json(resp).await
    }

    async fn dispose_item(&self, id: u32, outcome: DisposalOutcome) -> StockResult<()> {
        let body = DisposalRequest { outcome };
        send(self.client.post(self.config.dispose_url(id)).json(&body)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_report_shape() {
        let json = r#"{"db_path":"/srv/stock/main.sqlite3","db_exists":true}"#;
        let report: HealthReport = serde_json::from_str(json).unwrap();
        assert!(report.db_exists);
        assert_eq!(report.db_path, "/srv/stock/main.sqlite3");
    }
}
