//! カート追加ボタン

use leptos::*;

use crate::models::ProductId;
use crate::SharedCart;

/// 追加後に「Added ✓」を表示しておく時間
const FEEDBACK_MS: u32 = 1500;

#[component]
pub fn AddToCartButton(
    product_id: ProductId,
    cart: SharedCart,
    #[prop(optional)] element_id: Option<&'static str>,
) -> impl IntoView {
    let (added, set_added) = create_signal(false);
    let data_add = product_id.to_string();

    let on_click = move |_| {
        cart.add(&product_id, 1);
        set_added.set(true);
        // 1.5秒後に表示を戻す
        spawn_local(async move {
            gloo::timers::future::TimeoutFuture::new(FEEDBACK_MS).await;
            set_added.set(false);
        });
    };

    view! {
        <button class="btn btn-primary" id=element_id data-add=data_add on:click=on_click>
            {move || if added.get() { "Added ✓" } else { "Add to cart" }}
        </button>
    }
}
