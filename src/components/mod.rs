//! UIコンポーネントモジュール

pub mod add_to_cart;
pub mod cart_row;
pub mod product_card;

pub use add_to_cart::AddToCartButton;
pub use cart_row::CartRow;
pub use product_card::ProductGrid;
