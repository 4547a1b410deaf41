//! DOMヘルパー

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::models::PageQuery;

pub fn query(selector: &str) -> Option<Element> {
    web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()?
}

/// 描画先のコンテナを取得。ページに存在しなければ None
pub fn mount_target(selector: &str) -> Option<HtmlElement> {
    query(selector)?.dyn_into::<HtmlElement>().ok()
}

pub fn set_text(selector: &str, text: &str) {
    if let Some(el) = query(selector) {
        el.set_text_content(Some(text));
    }
}

/// ヘッダーのカート件数バッジを更新（0件なら非表示）
pub fn update_cart_count(count: u32) {
    let Some(el) = query("#cartCount") else {
        return;
    };
    el.set_text_content(Some(&count.to_string()));
    let _ = el.class_list().toggle_with_force("hidden", count == 0);
}

/// フッターの年表示
pub fn fill_year() {
    let year = js_sys::Date::new_0().get_full_year();
    set_text("#year", &year.to_string());
}

/// document.readyState が DOM構築中か
pub fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

pub fn page_query() -> PageQuery {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    PageQuery::parse(&search)
}
