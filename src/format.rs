//! Display Formatting
//!
//! Amounts are shown with thousands separators; weighted values are
//! rounded here, at display time only.

/// `50000` -> `50,000`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `("$", 50000)` -> `$50,000`
pub fn money(symbol: &str, amount: u64) -> String {
    format!("{}{}", symbol, group_thousands(amount))
}

/// Weighted amounts, rounded to whole units
pub fn money_f64(symbol: &str, amount: f64) -> String {
    let rounded = if amount.is_finite() && amount > 0.0 { amount.round() as u64 } else { 0 };
    money(symbol, rounded)
}

/// `Some(33.333)` -> `33.3%`, `None` -> `-`
pub fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => "-".to_string(),
    }
}
