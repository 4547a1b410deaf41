//! 商品詳細ページ

use leptos::*;

use crate::catalog::find_product;
use crate::components::AddToCartButton;
use crate::models::Product;
use crate::utils::dom;
use crate::utils::fetch::load_products;
use crate::utils::format::format_price;
use crate::StoreContext;

const DEFAULT_DESCRIPTION: &str =
    "Beautiful natural emerald with excellent saturation and clarity.";

/// #productDetail に ?id= の商品を表示。見つからなければその旨を表示
pub fn render_detail(ctx: &StoreContext) {
    let Some(container) = dom::mount_target("#productDetail") else {
        return;
    };
    let ctx = ctx.clone();
    let id = dom::page_query().id.unwrap_or_default();

    spawn_local(async move {
        let products = match load_products(&ctx.config.products_url()).await {
            Ok(products) => products,
            Err(e) => {
                log::error!(target: "detail", "{}", e);
                return;
            }
        };

        container.set_inner_html("");
        match find_product(&products, &id).cloned() {
            Some(product) => {
                mount_to(container, move || view! { <ProductDetail product=product ctx=ctx /> });
            }
            None => {
                log::warn!(target: "detail", "product {:?} not found", id);
                mount_to(container, || view! { <p>"Product not found."</p> });
            }
        }
    });
}

#[component]
fn ProductDetail(product: Product, ctx: StoreContext) -> impl IntoView {
    let img = ctx.config.image_src(&product);
    let description = product
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    view! {
        <div class="product-layout">
            <div>
                <img class="card-media" style="border-radius: 16px;" src=img alt=product.title.clone() />
            </div>
            <div class="stack-md">
                <div class="stack-sm">
                    <h1>{product.title.clone()}</h1>
                    <div class="badge">{product.spec_line()}</div>
                </div>
                <div class="price">{format_price(product.price)}</div>
                <p class="muted">{description}</p>
                <div class="stack-sm">
                    <AddToCartButton product_id=product.id.clone() cart=ctx.cart.clone() element_id="addToCart" />
                    <a class="btn btn-outline" href=ctx.config.checkout_href()>"Buy now"</a>
                </div>
            </div>
        </div>
    }
}
