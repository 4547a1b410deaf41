//! カートページ
//!
//! #cartTable の tbody に明細を描画し、小計は #cartSubtotal に書き込む。

use leptos::*;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::catalog::{resolve_lines, subtotal};
use crate::components::CartRow;
use crate::models::{CartEntry, Product};
use crate::utils::dom;
use crate::utils::fetch::load_products;
use crate::utils::format::format_price;
use crate::StoreContext;

pub fn render_cart(ctx: &StoreContext) {
    let Some(table) = dom::query("#cartTable") else {
        return;
    };
    let Some(body) = table
        .query_selector("tbody")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!(target: "cart-page", "#cartTable has no tbody");
        return;
    };
    let ctx = ctx.clone();

    spawn_local(async move {
        match load_products(&ctx.config.products_url()).await {
            Ok(products) => {
                body.set_inner_html("");
                mount_to(body, move || view! { <CartTable products=products ctx=ctx /> });
            }
            Err(e) => log::error!(target: "cart-page", "{}", e),
        }
    });
}

#[component]
fn CartTable(products: Vec<Product>, ctx: StoreContext) -> impl IntoView {
    let products = Rc::new(products);
    let cart = ctx.cart.clone();
    let (lines, set_lines) = create_signal(cart.get());

    // 小計はテーブル外の要素なので直接書き込む
    let products_total = Rc::clone(&products);
    create_effect(move |_| {
        let total = lines.with(|l| subtotal(&products_total, l));
        dom::set_text("#cartSubtotal", &format_price(total));
    });

    let rows = move || lines.with(|l| resolve_lines(&products, l));
    let is_empty = {
        let rows = rows.clone();
        move || rows().is_empty()
    };

    view! {
        <For
            each=rows
            key=|entry: &CartEntry| entry.product.id.clone()
            children=move |entry: CartEntry| {
                view! { <CartRow entry=entry lines=lines set_lines=set_lines cart=Rc::clone(&cart) /> }
            }
        />
        {move || is_empty().then(|| view! {
            <tr>
                <td colspan="5">"Your cart is empty."</td>
            </tr>
        })}
    }
}
