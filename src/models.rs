//! データ構造体モジュール

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================
// カタログ
// ============================================

/// 商品ID
///
/// カタログJSONでは数値・文字列のどちらでも書かれるため、文字列に正規化して保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => ProductId(s),
            RawId::Int(n) => ProductId(n.to_string()),
            // 3.0 は "3" になる
            RawId::Float(n) => ProductId(n.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// カット（一覧ページのカテゴリ）
    pub cut: String,
    pub carat: f64,
    pub clarity: String,
    /// 価格（通貨の整数単位）
    pub price: u64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// カード表示用の "Oval • 2.1 ct • VS" 形式
    pub fn spec_line(&self) -> String {
        format!("{} • {} ct • {}", self.cut, self.carat, self.clarity)
    }
}

// ============================================
// カート
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub quantity: u32,
}

/// カタログと突き合わせ済みのカート行
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    pub fn line_total(&self) -> u64 {
        self.product.price * u64::from(self.quantity)
    }
}

// ============================================
// クエリパラメータ
// ============================================

/// ページのクエリパラメータ（?id=, ?cut=, ?q=）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageQuery {
    pub id: Option<String>,
    pub cut: Option<String>,
    pub q: Option<String>,
}

impl PageQuery {
    /// location.search をパース
    ///
    /// キーごとに最初の値を採用する。重複キーや他のパラメータの壊れたエンコードは結果に影響しない。
    pub fn parse(search: &str) -> Self {
        let mut query = PageQuery::default();
        for pair in search.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let slot = match decode_component(key).as_str() {
                "id" => &mut query.id,
                "cut" => &mut query.cut,
                "q" => &mut query.q,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(decode_component(value));
            }
        }
        query
    }
}

/// "+" は空白、不正なUTF-8は置換文字にする（URLSearchParams と同じ）
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
