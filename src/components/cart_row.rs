//! カート明細行コンポーネント

use leptos::*;

use crate::cart::parse_quantity;
use crate::models::{CartEntry, CartLine};
use crate::utils::format::format_price;
use crate::SharedCart;

/// カートテーブルの1行
///
/// 数量はカート全体のシグナルから引くので、入力中に行が作り直されることはない。
#[component]
pub fn CartRow(
    entry: CartEntry,
    lines: ReadSignal<Vec<CartLine>>,
    set_lines: WriteSignal<Vec<CartLine>>,
    cart: SharedCart,
) -> impl IntoView {
    let initial = entry.quantity;
    let product = entry.product;
    let price = product.price;
    let id = product.id.clone();

    let quantity = {
        let id = id.clone();
        move || {
            lines.with(|l| {
                l.iter()
                    .find(|line| line.id == id)
                    .map(|line| line.quantity)
                    .unwrap_or(initial)
            })
        }
    };
    let line_total = {
        let quantity = quantity.clone();
        move || format_price(price * u64::from(quantity()))
    };

    let on_input = {
        let cart = cart.clone();
        let id = id.clone();
        move |ev: web_sys::Event| {
            cart.set_quantity(&id, parse_quantity(&event_target_value(&ev)));
            set_lines.set(cart.get());
        }
    };

    let on_remove = {
        let id = id.clone();
        move |_| {
            cart.remove(&id);
            set_lines.set(cart.get());
        }
    };

    view! {
        <tr>
            <td>
                <div class="stack-sm">
                    <strong>{product.title.clone()}</strong>
                    <span class="muted">{format!("{} • {} ct", product.cut, product.carat)}</span>
                </div>
            </td>
            <td>{format_price(price)}</td>
            <td>
                <input
                    type="number"
                    min="1"
                    style="width:84px"
                    data-qty=id.to_string()
                    prop:value=move || quantity().to_string()
                    on:input=on_input
                />
            </td>
            <td>{line_total}</td>
            <td>
                <button class="btn btn-outline" data-remove=id.to_string() on:click=on_remove>
                    "Remove"
                </button>
            </td>
        </tr>
    }
}
