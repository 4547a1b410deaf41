//! カタログ検索・集計
//!
//! 商品数は数十件程度なので検索はすべて線形走査。

use crate::models::{CartEntry, CartLine, PageQuery, Product, ProductId};

/// トップページのおすすめ（先頭からN件）
pub fn featured(products: &[Product], count: usize) -> Vec<Product> {
    products.iter().take(count).cloned().collect()
}

pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id.as_str() == id)
}

/// 一覧ページのフィルタ
///
/// - `cut`: カットの完全一致（大文字小文字を無視）
/// - `q`: "タイトル カット クラリティ" の部分一致（大文字小文字を無視）
///
/// 空または未指定の条件は無視する。
pub fn filter_products(products: &[Product], query: &PageQuery) -> Vec<Product> {
    let cut = query
        .cut
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase);
    let needle = query.q.as_deref().unwrap_or("").to_lowercase();

    products
        .iter()
        .filter(|p| cut.as_ref().map_or(true, |c| p.cut.to_lowercase() == *c))
        .filter(|p| {
            needle.is_empty()
                || format!("{} {} {}", p.title, p.cut, p.clarity)
                    .to_lowercase()
                    .contains(&needle)
        })
        .cloned()
        .collect()
}

/// カート行をカタログと突き合わせる。カタログにない商品は除外
pub fn resolve_lines(products: &[Product], lines: &[CartLine]) -> Vec<CartEntry> {
    lines
        .iter()
        .filter_map(|line| {
            lookup(products, &line.id).map(|p| CartEntry {
                product: p.clone(),
                quantity: line.quantity,
            })
        })
        .collect()
}

/// 小計（カタログに存在する行の 価格×数量 の合計）
pub fn subtotal(products: &[Product], lines: &[CartLine]) -> u64 {
    lines
        .iter()
        .filter_map(|line| lookup(products, &line.id).map(|p| p.price * u64::from(line.quantity)))
        .sum()
}

fn lookup<'a>(products: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    products.iter().find(|p| &p.id == id)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn product(id: &str, title: &str, cut: &str, clarity: &str, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            cut: cut.to_string(),
            carat: 1.5,
            clarity: clarity.to_string(),
            price,
            image: None,
            description: None,
        }
    }

    fn line(id: &str, quantity: u32) -> CartLine {
        CartLine {
            id: ProductId::new(id),
            quantity,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product("1", "Muzo Vivid Green", "Oval", "VS", 125000),
            product("2", "Chivor Classic", "Emerald", "SI", 90000),
            product("3", "Zambian Deep", "oval", "Eye Clean", 60000),
            product("4", "Panjshir Drop", "Pear", "VS", 45000),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn subtotal_matches_worked_example() {
        let products = vec![product("A", "A", "Oval", "VS", 1000), product("B", "B", "Oval", "VS", 2000)];
        let cart = vec![line("A", 2), line("B", 1)];
        assert_eq!(subtotal(&products, &cart), 4000);
    }

    #[test]
    fn subtotal_skips_products_missing_from_catalog() {
        let products = vec![product("A", "A", "Oval", "VS", 1000)];
        let cart = vec![line("A", 3), line("gone", 5)];
        assert_eq!(subtotal(&products, &cart), 3000);
        assert_eq!(resolve_lines(&products, &cart).len(), 1);
    }

    #[test]
    fn resolve_keeps_cart_order() {
        let cart = vec![line("4", 1), line("1", 2)];
        let resolved = resolve_lines(&sample(), &cart);
        assert_eq!(resolved[0].product.id.as_str(), "4");
        assert_eq!(resolved[1].line_total(), 250000);
    }

    #[test]
    fn cut_filter_is_case_insensitive_equality() {
        let query = PageQuery { cut: Some("OVAL".into()), ..Default::default() };
        assert_eq!(ids(&filter_products(&sample(), &query)), vec!["1", "3"]);
    }

    #[test]
    fn text_filter_searches_title_cut_and_clarity() {
        let by_title = PageQuery { q: Some("chivor".into()), ..Default::default() };
        assert_eq!(ids(&filter_products(&sample(), &by_title)), vec!["2"]);

        let by_clarity = PageQuery { q: Some("EYE CLEAN".into()), ..Default::default() };
        assert_eq!(ids(&filter_products(&sample(), &by_clarity)), vec!["3"]);

        let by_cut = PageQuery { q: Some("pea".into()), ..Default::default() };
        assert_eq!(ids(&filter_products(&sample(), &by_cut)), vec!["4"]);
    }

    #[test]
    fn filters_combine() {
        let query = PageQuery { cut: Some("oval".into()), q: Some("vs".into()), ..Default::default() };
        assert_eq!(ids(&filter_products(&sample(), &query)), vec!["1"]);
    }

    #[test]
    fn empty_filters_return_everything() {
        let query = PageQuery { cut: Some(String::new()), q: Some(String::new()), id: None };
        assert_eq!(filter_products(&sample(), &query).len(), 4);
        assert_eq!(filter_products(&sample(), &PageQuery::default()).len(), 4);
    }

    #[test]
    fn featured_takes_leading_products() {
        assert_eq!(ids(&featured(&sample(), 2)), vec!["1", "2"]);
        assert_eq!(featured(&sample(), 8).len(), 4);
    }

    #[test]
    fn find_product_by_id() {
        let products = sample();
        assert_eq!(find_product(&products, "3").map(|p| p.title.as_str()), Some("Zambian Deep"));
        assert!(find_product(&products, "99").is_none());
    }

    #[test]
    fn bundled_catalog_parses() {
        let products: Vec<Product> =
            serde_json::from_str(include_str!("../data/products.json")).unwrap();
        assert!(!products.is_empty());
        assert!(products.iter().all(|p| p.price > 0));
    }
}
