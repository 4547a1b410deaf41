mod cart;
mod catalog;
mod checkout;
mod components;
mod models;
mod utils;
mod views;

use std::rc::Rc;

use cart::CartStore;
use utils::config::SiteConfig;
use utils::dom;
use utils::storage::LocalStorageBackend;

pub type SharedCart = Rc<CartStore<LocalStorageBackend>>;

// ============================================
// 共有コンテキスト
// ============================================

/// 各ページの描画関数に渡す設定とカート
#[derive(Clone)]
pub struct StoreContext {
    pub config: Rc<SiteConfig>,
    pub cart: SharedCart,
}

impl StoreContext {
    fn from_location() -> Self {
        let config = SiteConfig::from_location();
        // カート変更のたびにヘッダーの件数を更新
        let cart = CartStore::new(LocalStorageBackend, config.storage_key.clone())
            .with_listener(dom::update_cart_count);
        StoreContext {
            config: Rc::new(config),
            cart: Rc::new(cart),
        }
    }
}

fn init() {
    let ctx = StoreContext::from_location();
    log::info!(target: "init", "base={} cart lines={}", ctx.config.base, ctx.cart.get().len());

    dom::update_cart_count(ctx.cart.count());
    dom::fill_year();

    views::render_home(&ctx);
    views::render_listing(&ctx);
    views::render_detail(&ctx);
    views::render_cart(&ctx);
    views::render_checkout(&ctx);
}

fn main() {
    console_error_panic_hook::set_once();
    utils::log_trace::init(utils::log_trace::level_for(cfg!(debug_assertions)));

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    // DOM構築前に読み込まれた場合は DOMContentLoaded を待つ
    if dom::is_loading(&document.ready_state()) {
        gloo::events::EventListener::once(&document, "DOMContentLoaded", |_| init()).forget();
    } else {
        init();
    }
}
