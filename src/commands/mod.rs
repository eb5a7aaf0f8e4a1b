//! Stock API Bindings
//!
//! Browser `fetch` implementation of the stock API, organized by domain.

mod item;
mod reference;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use stock_core::{
    describe_unknown, ApiConfig, DisposalOutcome, Item, NewItem, StockApi, StockError, StockResult,
    DEFAULT_API_BASE, UNKNOWN_ERROR,
};

/// API handle used by the UI
#[derive(Debug, Clone)]
pub struct FetchApi {
    config: ApiConfig,
}

impl FetchApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Base URL baked in at build time via `DLC_API_BASE`
    pub fn from_build_env() -> Self {
        Self::new(ApiConfig::new(option_env!("DLC_API_BASE").unwrap_or(DEFAULT_API_BASE)))
    }
}

#[async_trait(?Send)]
impl StockApi for FetchApi {
    async fn list_categories(&self) -> StockResult<Vec<String>> {
        reference::list_categories(&self.config).await
    }

    async fn list_locations(&self) -> StockResult<Vec<String>> {
        reference::list_locations(&self.config).await
    }

    async fn list_items(&self) -> StockResult<Vec<Item>> {
        item::list_items(&self.config).await
    }

    async fn create_item(&self, new_item: &NewItem) -> StockResult<Item> {
        item::create_item(&self.config, new_item).await
    }

    async fn dispose_item(&self, id: u32, outcome: DisposalOutcome) -> StockResult<()> {
        item::dispose_item(&self.config, id, outcome).await
    }
}

// ========================
// Fetch Helpers
// ========================

async fn fetch(method: &str, url: &str, body: Option<&str>) -> Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into::<Response>()
}

/// Send a request; non-2xx responses become `Remote` with the body text
pub(crate) async fn send(method: &str, url: &str, body: Option<&str>) -> StockResult<Response> {
    let resp = fetch(method, url, body).await.map_err(remote)?;
    if resp.ok() {
        return Ok(resp);
    }
    let text = read_text(&resp).await.unwrap_or_default();
    Err(StockError::from_response(resp.status(), &text))
}

pub(crate) async fn read_json<T: DeserializeOwned>(resp: Response) -> StockResult<T> {
    let json = JsFuture::from(resp.json().map_err(remote)?)
        .await
        .map_err(remote)?;
    serde_wasm_bindgen::from_value(json)
        .map_err(|e| StockError::Remote(format!("Invalid response: {}", e)))
}

pub(crate) fn encode<T: serde::Serialize>(value: &T) -> StockResult<String> {
    serde_json::to_string(value)
        .map_err(|e| StockError::Remote(format!("Could not encode request: {}", e)))
}

async fn read_text(resp: &Response) -> Result<String, JsValue> {
    let text = JsFuture::from(resp.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}

fn remote(value: JsValue) -> StockError {
    StockError::Remote(js_error_message(&value))
}

/// Text for a thrown JS value: strings as-is, `Error.message`, else JSON
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    match serde_wasm_bindgen::from_value::<serde_json::Value>(value.clone()) {
        Ok(v) => describe_unknown(&v),
        Err(_) => UNKNOWN_ERROR.to_string(),
    }
}
