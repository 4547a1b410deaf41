//! 価格フォーマット
//!
//! インドルピー表記（en-IN の桁区切り、小数なし）。下3桁の後は2桁ごとに区切る。

const CURRENCY_SYMBOL: &str = "₹";

/// 例: 1234567 → "₹12,34,567"
pub fn format_price(amount: u64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, group_indian(amount))
}

fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
