//! Text coercion for storage-layer values.
//!
//! Catalog tables arrive as field-name → text maps; every numeric or boolean
//! interpretation happens here, tolerantly. A value that does not parse is
//! reported as `None` and the caller decides whether to skip the row or fall
//! back. Nothing in this module raises.

use rust_decimal::Decimal;

/// Case-insensitive `"true"` parse; anything else (including empty text) is
/// `false`.
pub fn parse_bool(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("true")
}

/// Parse a minute count, accepting integer or float spellings ("60", "60.0")
/// and truncating toward zero.
pub fn parse_minutes(text: &str) -> Option<i64> {
    let value = text.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value as i64)
}

/// Parse a monetary rate.
pub fn parse_rate(text: &str) -> Option<Decimal> {
    text.trim().parse::<Decimal>().ok()
}

/// First whitespace-separated token that parses as an integer, if any.
///
/// Used for the cardinal extraction from free-text pet counts ("2 pets" → 2).
/// When several tokens parse, the first wins.
pub fn first_int_token(text: &str) -> Option<i64> {
    text.split_whitespace()
        .find_map(|token| token.parse::<i64>().ok())
}
