//! カートストア
//!
//! 操作のたびにストレージから全体を読み直し、メモリ上で変更してから全体を書き戻す。
//! 数量は常に1以上。

use crate::models::{CartLine, ProductId};
use crate::utils::storage::CartStorage;

pub struct CartStore<S> {
    storage: S,
    key: String,
    on_change: Option<Box<dyn Fn(u32)>>,
}

impl<S: CartStorage> CartStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        CartStore {
            storage,
            key: key.into(),
            on_change: None,
        }
    }

    /// 変更時に合計数量を受け取るリスナーを登録
    pub fn with_listener(mut self, listener: impl Fn(u32) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    /// カート内容を取得。未保存・破損データは空カート
    pub fn get(&self) -> Vec<CartLine> {
        let Some(json) = self.storage.load(&self.key) else {
            return Vec::new();
        };
        match serde_json::from_str(&json) {
            Ok(lines) => lines,
            Err(e) => {
                log::warn!(target: "cart", "stored cart is unreadable, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// 合計数量（ヘッダーのカウンター表示用）
    pub fn count(&self) -> u32 {
        total_quantity(&self.get())
    }

    /// 既存行なら数量を加算、なければ末尾に追加
    pub fn add(&self, id: &ProductId, quantity: u32) {
        let quantity = quantity.max(1);
        let mut lines = self.get();
        match lines.iter_mut().find(|l| &l.id == id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => lines.push(CartLine {
                id: id.clone(),
                quantity,
            }),
        }
        log::info!(target: "cart", "add {} x{}", id, quantity);
        self.save(&lines);
    }

    pub fn remove(&self, id: &ProductId) {
        let mut lines = self.get();
        lines.retain(|l| &l.id != id);
        log::info!(target: "cart", "remove {}", id);
        self.save(&lines);
    }

    /// 数量を設定（1未満は1に丸める）。行がなければ何もしない
    pub fn set_quantity(&self, id: &ProductId, quantity: i64) {
        let mut lines = self.get();
        let Some(line) = lines.iter_mut().find(|l| &l.id == id) else {
            return;
        };
        line.quantity = quantity.clamp(1, i64::from(u32::MAX)) as u32;
        log::info!(target: "cart", "set {} to {}", id, line.quantity);
        self.save(&lines);
    }

    fn save(&self, lines: &[CartLine]) {
        match serde_json::to_string(lines) {
            Ok(json) => {
                if let Err(e) = self.storage.save(&self.key, &json) {
                    log::warn!(target: "cart", "failed to persist cart: {}", e);
                }
            }
            Err(e) => log::error!(target: "cart", "failed to serialize cart: {}", e),
        }
        if let Some(listener) = &self.on_change {
            listener(total_quantity(lines));
        }
    }
}

pub fn total_quantity(lines: &[CartLine]) -> u32 {
    lines.iter().fold(0u32, |n, l| n.saturating_add(l.quantity))
}

/// 数量入力欄の値を整数に変換（小数は切り捨て、数値でなければ0）
pub fn parse_quantity(input: &str) -> i64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => n.trunc() as i64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;
    use std::cell::Cell;
    use std::rc::Rc;

    const KEY: &str = "emerald.cart.v1";

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    fn store() -> CartStore<MemoryStorage> {
        CartStore::new(MemoryStorage::new(), KEY)
    }

    #[test]
    fn adding_same_product_twice_accumulates() {
        let cart = store();
        cart.add(&id("a"), 1);
        cart.add(&id("a"), 2);
        assert_eq!(cart.get(), vec![CartLine { id: id("a"), quantity: 3 }]);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let cart = store();
        cart.add(&id("b"), 1);
        cart.add(&id("a"), 1);
        cart.add(&id("b"), 1);
        let ids: Vec<_> = cart.get().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![id("b"), id("a")]);
    }

    #[test]
    fn add_zero_still_stores_at_least_one() {
        let cart = store();
        cart.add(&id("a"), 0);
        assert_eq!(cart.get()[0].quantity, 1);
    }

    #[test]
    fn remove_drops_only_that_line() {
        let cart = store();
        cart.add(&id("a"), 2);
        cart.add(&id("b"), 1);
        cart.add(&id("c"), 4);
        cart.remove(&id("b"));
        assert_eq!(
            cart.get(),
            vec![
                CartLine { id: id("a"), quantity: 2 },
                CartLine { id: id("c"), quantity: 4 },
            ]
        );
    }

    #[test]
    fn set_quantity_clamps_to_one() {
        let cart = store();
        cart.add(&id("a"), 5);
        cart.set_quantity(&id("a"), 0);
        assert_eq!(cart.get()[0].quantity, 1);
        cart.set_quantity(&id("a"), -3);
        assert_eq!(cart.get()[0].quantity, 1);
        cart.set_quantity(&id("a"), 7);
        assert_eq!(cart.get()[0].quantity, 7);
    }

    #[test]
    fn set_quantity_on_missing_line_is_noop() {
        let cart = store();
        cart.add(&id("a"), 1);
        cart.set_quantity(&id("zzz"), 4);
        assert_eq!(cart.get(), vec![CartLine { id: id("a"), quantity: 1 }]);
    }

    #[test]
    fn malformed_storage_reads_as_empty_cart() {
        let cart = CartStore::new(MemoryStorage::with_item(KEY, "{not json"), KEY);
        assert!(cart.get().is_empty());
        cart.add(&id("a"), 1);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn mutations_rewrite_whole_list() {
        let cart = store();
        cart.add(&id("a"), 2);
        cart.add(&id("b"), 1);
        let stored = cart.storage.item(KEY).unwrap();
        assert_eq!(stored, r#"[{"id":"a","quantity":2},{"id":"b","quantity":1}]"#);
    }

    #[test]
    fn listener_receives_total_quantity() {
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let cart = store().with_listener(move |n| sink.set(n));
        cart.add(&id("a"), 2);
        assert_eq!(seen.get(), 2);
        cart.add(&id("b"), 3);
        assert_eq!(seen.get(), 5);
        cart.remove(&id("a"));
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn parse_quantity_truncates_and_rejects_garbage() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 2.9 "), 2);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity("-4"), -4);
    }
}
