//! サイト設定
//!
//! 現在のページの場所からパスの基準を決める。/pages/ 配下なら "..", それ以外は "."。

use crate::models::{Product, ProductId};

pub const STORAGE_KEY: &str = "emerald.cart.v1";
pub const FEATURED_COUNT: usize = 8;
const DEFAULT_WHATSAPP_PHONE: &str = "919999999999";

/// 送信先番号（ビルド時に埋め込み、未設定ならデフォルト）
pub fn default_whatsapp_phone() -> &'static str {
    option_env!("EMERALD_WHATSAPP_PHONE").unwrap_or(DEFAULT_WHATSAPP_PHONE)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub base: String,
    pub storage_key: String,
    pub whatsapp_phone: String,
}

impl SiteConfig {
    pub fn for_pathname(pathname: &str) -> Self {
        let base = if pathname.contains("/pages/") { ".." } else { "." };
        SiteConfig {
            base: base.to_string(),
            storage_key: STORAGE_KEY.to_string(),
            whatsapp_phone: default_whatsapp_phone().to_string(),
        }
    }

    /// 現在の location.pathname から作成
    pub fn from_location() -> Self {
        let pathname = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self::for_pathname(&pathname)
    }

    pub fn products_url(&self) -> String {
        format!("{}/data/products.json", self.base)
    }

    pub fn placeholder_image(&self) -> String {
        format!("{}/assets/img/placeholder.jpg", self.base)
    }

    /// 商品画像のパス。"/" 始まりは基準パスを前置、未設定ならプレースホルダー
    pub fn image_src(&self, product: &Product) -> String {
        match product.image.as_deref() {
            Some(img) if img.starts_with('/') => format!("{}{}", self.base, img),
            Some(img) if !img.is_empty() => img.to_string(),
            _ => self.placeholder_image(),
        }
    }

    pub fn product_href(&self, id: &ProductId) -> String {
        format!(
            "{}/pages/product.html?id={}",
            self.base,
            urlencoding::encode(id.as_str())
        )
    }

    pub fn checkout_href(&self) -> String {
        format!("{}/pages/checkout.html", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(image: Option<&str>) -> Product {
        Product {
            id: ProductId::new("em 1"),
            title: "Muzo".into(),
            cut: "Oval".into(),
            carat: 1.2,
            clarity: "VS".into(),
            price: 1000,
            image: image.map(str::to_string),
            description: None,
        }
    }

    #[test]
    fn base_depends_on_pages_directory() {
        assert_eq!(SiteConfig::for_pathname("/index.html").base, ".");
        assert_eq!(SiteConfig::for_pathname("/shop/pages/cart.html").base, "..");
        assert_eq!(SiteConfig::for_pathname("/pages/cart.html").products_url(), "../data/products.json");
    }

    #[test]
    fn image_paths_resolve_against_base() {
        let cfg = SiteConfig::for_pathname("/pages/products.html");
        assert_eq!(cfg.image_src(&product(Some("/assets/img/e1.jpg"))), "../assets/img/e1.jpg");
        assert_eq!(cfg.image_src(&product(Some("https://cdn.example/e1.jpg"))), "https://cdn.example/e1.jpg");
        assert_eq!(cfg.image_src(&product(None)), "../assets/img/placeholder.jpg");
        assert_eq!(cfg.image_src(&product(Some(""))), "../assets/img/placeholder.jpg");
    }

    #[test]
    fn product_href_encodes_id() {
        let cfg = SiteConfig::for_pathname("/");
        assert_eq!(cfg.product_href(&ProductId::new("em 1")), "./pages/product.html?id=em%201");
        assert_eq!(cfg.checkout_href(), "./pages/checkout.html");
    }
}
