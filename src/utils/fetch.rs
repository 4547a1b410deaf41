//! カタログ読み込み
//!
//! キャッシュ・リトライなし。ネットワーク・ステータス・パースのどれかで失敗したら即エラー。

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::Product;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("window is not available")]
    NoWindow,
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("fetch failed: {0}")]
    Network(String),
    #[error("failed to load products (HTTP {0})")]
    Status(u16),
    #[error("failed to parse products: {0}")]
    Parse(String),
}

/// 商品カタログをfetch
pub async fn load_products(url: &str) -> Result<Vec<Product>, CatalogError> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| CatalogError::Request(format!("{:?}", e)))?;

    let window = web_sys::window().ok_or(CatalogError::NoWindow)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| CatalogError::Network(format!("{:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| CatalogError::Network("response is not a Response".to_string()))?;

    if !resp.ok() {
        return Err(CatalogError::Status(resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(|e| CatalogError::Parse(format!("{:?}", e)))?)
        .await
        .map_err(|e| CatalogError::Parse(format!("{:?}", e)))?;

    let products: Vec<Product> =
        serde_wasm_bindgen::from_value(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
    log::debug!(target: "catalog", "loaded {} products from {}", products.len(), url);
    Ok(products)
}
