//! Swift literal formatting.

use tracing::warn;

/// Format a number as a Swift floating-point literal. Always carries a
/// decimal point or exponent, so `28` becomes `28.0`.
pub fn float_literal(value: f64) -> String {
    if !value.is_finite() {
        warn!(value, "non-finite value cannot be written as a Swift literal, using 0.0");
        return "0.0".to_string();
    }
    format!("{value:?}")
}

/// Escape a value for use inside a Swift string literal.
pub fn string_literal_contents(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
