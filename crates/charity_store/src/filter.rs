//! Field equality filters.

use crate::document::Document;
use crate::value::Value;
use std::fmt;

/// Selects documents whose `field` equals `value`.
///
/// Equality follows [`Value::matches_query`]. A document without the field
/// never matches.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    /// Field name to compare.
    pub field: String,
    /// Value the field must equal.
    pub value: Value,
}

impl FieldFilter {
    /// Creates a new filter.
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Returns true if the document satisfies this filter.
    pub fn matches(&self, doc: &Document) -> bool {
        doc.get(&self.field)
            .is_some_and(|stored| stored.matches_query(&self.value))
    }
}

impl fmt::Display for FieldFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.field, self.value)
    }
}
