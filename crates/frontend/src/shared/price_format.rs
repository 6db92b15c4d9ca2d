//! Price and rating text for product cards

use contracts::domain::a001_catalog_product::aggregate::Rating;

/// Formats a number with a comma thousands separator and two decimals.
///
/// `1234.5` -> `"1,234.50"`
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(',');
        }
        result.push(c);
    }
    let integer_part: String = result.chars().rev().collect();

    format!("{}.{}", integer_part, decimal_part)
}

/// Price as shown on a card, e.g. `"$109.95"`
pub fn format_price(price: f64) -> String {
    format!("${}", format_amount(price))
}

/// Rating as shown on a card, e.g. `"3.9 (120)"`
pub fn format_rating(rating: &Rating) -> String {
    format!("{:.1} ({})", rating.rate, rating.count)
}
