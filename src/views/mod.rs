//! ページ描画モジュール
//!
//! 各ページの描画関数は担当コンテナがなければ何もしない。すべてのページで同じwasmを読み込むため。

pub mod cart;
pub mod checkout;
pub mod detail;
pub mod home;
pub mod listing;

pub use cart::render_cart;
pub use checkout::render_checkout;
pub use detail::render_detail;
pub use home::render_home;
pub use listing::render_listing;
