//! Property-based test generators.
//!
//! Provides proptest strategies for console input: digit strings, comma
//! lists, free text and field names.

use charity_store::{Document, Value};
use proptest::prelude::*;

/// Generates non-empty ASCII digit strings that fit in a signed 64-bit
/// integer.
pub fn arb_digit_input() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{1,18}").expect("Invalid regex")
}

/// Generates digit strings too long for a signed 64-bit integer.
pub fn arb_overflowing_digits() -> impl Strategy<Value = String> {
    prop::string::string_regex("[1-9][0-9]{19,24}").expect("Invalid regex")
}

/// Generates input with at least one comma.
pub fn arb_comma_input() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(arb_segment(), 1..5),
        arb_segment(),
    )
        .prop_map(|(mut head, last)| {
            head.push(last);
            head.join(",")
        })
}

/// Generates input that is neither all digits nor contains a comma.
pub fn arb_plain_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z@.+ ]{0,6}[a-zA-Z@.+][a-zA-Z0-9@.+ ]{0,10}")
        .expect("Invalid regex")
}

fn arb_field_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-zA-Z]{0,11}").expect("Invalid regex")
}

/// Generates a flat document with distinct field names and scalar values.
pub fn arb_flat_document() -> impl Strategy<Value = Document> {
    prop::collection::btree_map(arb_field_name(), arb_scalar(), 1..6)
        .prop_map(|fields| fields.into_iter().collect())
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Integer),
        arb_plain_text().prop_map(Value::Text),
    ]
}

fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9 ]{0,8}").expect("Invalid regex")
}
