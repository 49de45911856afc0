// ── Display text helpers ──
//
// Every server-supplied string passes through `sanitize` before it lands
// in a view model, so terminal control sequences embedded in product
// names or contacts are never written to the screen.

use rust_decimal::Decimal;

/// Shown for any field the server left out.
pub const MISSING: &str = "-";

/// Strip control characters; tabs and newlines collapse to a space.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            '\t' | '\n' | '\r' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Sanitized text, or `placeholder` when absent.
pub fn text_or(raw: Option<&str>, placeholder: &str) -> String {
    raw.map_or_else(|| placeholder.to_owned(), sanitize)
}

/// Sanitized text, or [`MISSING`] when absent.
pub fn text(raw: Option<&str>) -> String {
    text_or(raw, MISSING)
}

/// `$9.99`, or [`MISSING`] when the price is unknown.
pub fn money(price: Option<Decimal>) -> String {
    price.map_or_else(|| MISSING.to_owned(), |p| format!("${}", p.normalize()))
}

/// Integer count, or [`MISSING`] when unknown.
pub fn count(value: Option<i64>) -> String {
    value.map_or_else(|| MISSING.to_owned(), |v| v.to_string())
}
