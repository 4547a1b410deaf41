//! トップページ（おすすめ商品）

use leptos::*;

use crate::catalog::featured;
use crate::components::ProductGrid;
use crate::utils::config::FEATURED_COUNT;
use crate::utils::dom;
use crate::utils::fetch::load_products;
use crate::StoreContext;

/// #featuredGrid にカタログ先頭の商品を表示
pub fn render_home(ctx: &StoreContext) {
    let Some(grid) = dom::mount_target("#featuredGrid") else {
        return;
    };
    let ctx = ctx.clone();

    spawn_local(async move {
        match load_products(&ctx.config.products_url()).await {
            Ok(products) => {
                let products = featured(&products, FEATURED_COUNT);
                grid.set_inner_html("");
                mount_to(grid, move || view! { <ProductGrid products=products ctx=ctx /> });
            }
            Err(e) => log::error!(target: "home", "{}", e),
        }
    });
}
