//! Text-to-value coercion for console input.
//!
//! The rule is narrow:
//!
//! 1. text containing a comma becomes an array of the comma-separated
//!    segments, each kept as text;
//! 2. otherwise, non-empty text made only of ASCII digits becomes an
//!    integer;
//! 3. anything else stays text.
//!
//! Signs, decimal points, booleans and dates are never recognized, so
//! `"-5"` and `"3.14"` remain text.

use charity_store::Value;

/// Coerces one line of input into a field value.
///
/// # Example
///
/// ```rust
/// use charity_core::coerce;
/// use charity_store::Value;
///
/// assert_eq!(coerce("42"), Value::Integer(42));
/// assert_eq!(coerce("a,b"), Value::from(vec!["a", "b"]));
/// assert_eq!(coerce("-5"), Value::from("-5"));
/// ```
pub fn coerce(raw: &str) -> Value {
    if raw.contains(',') {
        return Value::Array(raw.split(',').map(Value::from).collect());
    }
    coerce_search_key(raw)
}

/// Coerces a lookup value: digit-only text becomes an integer, anything
/// else stays text. Commas are not split.
pub fn coerce_search_key(raw: &str) -> Value {
    parse_digits(raw).map_or_else(|| Value::from(raw), Value::Integer)
}

/// Digit strings beyond the i64 range stay text.
fn parse_digits(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
