//! チェックアウトページ
//!
//! 注文内容を #checkoutSummary に表示し、#whatsappCheckout のリンク先に注文メッセージを設定する。

use leptos::*;

use crate::checkout::CheckoutSummary;
use crate::utils::dom;
use crate::utils::fetch::load_products;
use crate::StoreContext;

pub fn render_checkout(ctx: &StoreContext) {
    let Some(container) = dom::mount_target("#checkoutSummary") else {
        return;
    };
    let ctx = ctx.clone();

    spawn_local(async move {
        let products = match load_products(&ctx.config.products_url()).await {
            Ok(products) => products,
            Err(e) => {
                log::error!(target: "checkout", "{}", e);
                return;
            }
        };

        container.set_inner_html("");
        let Some(summary) = CheckoutSummary::build(&products, &ctx.cart.get()) else {
            mount_to(container, || view! { <p>"Your cart is empty."</p> });
            return;
        };

        if let Some(link) = dom::query("#whatsappCheckout") {
            // data-phone 属性が優先、なければ設定値
            let phone = link
                .get_attribute("data-phone")
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| ctx.config.whatsapp_phone.clone());
            let _ = link.set_attribute("href", &summary.whatsapp_link(&phone));
            log::info!(target: "checkout", "order link ready for {} ({} lines)", phone, summary.lines.len());
        }

        mount_to(container, move || view! { <SummaryCard summary=summary /> });
    });
}

#[component]
fn SummaryCard(summary: CheckoutSummary) -> impl IntoView {
    let total = summary.formatted_total();

    view! {
        <div class="card" style="padding: 16px;">
            <div class="stack-sm">
                {summary.lines.into_iter().map(|line| view! { <div>{line}</div> }).collect_view()}
                <hr />
                <div>
                    <strong>"Total: " {total}</strong>
                </div>
            </div>
        </div>
    }
}
