//! 商品カードコンポーネント

use leptos::*;

use super::AddToCartButton;
use crate::models::Product;
use crate::utils::format::format_price;
use crate::StoreContext;

/// 一覧・トップページ用の商品カード
#[component]
pub fn ProductCard(product: Product, ctx: StoreContext) -> impl IntoView {
    let href = ctx.config.product_href(&product.id);
    let img = ctx.config.image_src(&product);

    view! {
        <div class="card">
            <a href=href.clone()>
                <img class="card-media" src=img alt=product.title.clone() />
            </a>
            <div class="card-body">
                <strong>{product.title.clone()}</strong>
                <span class="muted">{product.spec_line()}</span>
                <div class="price">{format_price(product.price)}</div>
                <div>
                    <a href=href class="btn btn-outline">"View details"</a>
                    <AddToCartButton product_id=product.id.clone() cart=ctx.cart.clone() />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProductGrid(products: Vec<Product>, ctx: StoreContext) -> impl IntoView {
    products
        .into_iter()
        .map(|p| view! { <ProductCard product=p ctx=ctx.clone() /> })
        .collect_view()
}
