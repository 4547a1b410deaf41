//! 商品一覧ページ
//!
//! ?cut= と ?q= で絞り込む。

use leptos::*;

use crate::catalog::filter_products;
use crate::components::ProductGrid;
use crate::utils::dom;
use crate::utils::fetch::load_products;
use crate::StoreContext;

pub fn render_listing(ctx: &StoreContext) {
    let Some(grid) = dom::mount_target("#productsGrid") else {
        return;
    };
    let ctx = ctx.clone();
    let query = dom::page_query();

    spawn_local(async move {
        match load_products(&ctx.config.products_url()).await {
            Ok(products) => {
                let products = filter_products(&products, &query);
                log::debug!(target: "listing", "{} products match {:?}", products.len(), query);
                grid.set_inner_html("");
                mount_to(grid, move || view! { <ProductGrid products=products ctx=ctx /> });
            }
            Err(e) => log::error!(target: "listing", "{}", e),
        }
    });
}
