//! チェックアウト集計とWhatsAppリンク生成

use crate::catalog::{resolve_lines, subtotal};
use crate::models::{CartLine, Product};
use crate::utils::format::format_price;

const WHATSAPP_BASE: &str = "https://wa.me";

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary {
    /// "2 x Muzo (2.1 ct) - ₹2,50,000" 形式の明細
    pub lines: Vec<String>,
    pub total: u64,
}

impl CheckoutSummary {
    /// カートが空なら None
    pub fn build(products: &[Product], cart: &[CartLine]) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }

        let lines = resolve_lines(products, cart)
            .into_iter()
            .map(|entry| {
                format!(
                    "{} x {} ({} ct) - {}",
                    entry.quantity,
                    entry.product.title,
                    entry.product.carat,
                    format_price(entry.line_total())
                )
            })
            .collect();

        Some(CheckoutSummary {
            lines,
            total: subtotal(products, cart),
        })
    }

    pub fn formatted_total(&self) -> String {
        format_price(self.total)
    }

    /// 送信する注文メッセージ
    pub fn message(&self) -> String {
        format!(
            "Hello! I'd like to order:\n\n{}\n\nTotal: {}",
            self.lines.join("\n"),
            self.formatted_total()
        )
    }

    pub fn whatsapp_link(&self, phone: &str) -> String {
        format!(
            "{}/{}?text={}",
            WHATSAPP_BASE,
            phone,
            encode_uri_component(&self.message())
        )
    }
}

/// JS の encodeURIComponent と同じ結果にする（!'()* はそのまま残す）
fn encode_uri_component(text: &str) -> String {
    urlencoding::encode(text)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}
