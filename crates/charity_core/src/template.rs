//! Field inference from a sample document.

use charity_store::{Document, ID_FIELD};

/// The editable field set inferred from one sampled document.
///
/// Only the sampled document's shape is considered: when a collection holds
/// documents of different shapes, new documents follow whichever one the
/// store happened to return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTemplate {
    fields: Vec<String>,
}

impl FieldTemplate {
    /// Infers the template from a sample, in the sample's field order,
    /// skipping the identifier.
    pub fn from_sample(sample: &Document) -> Self {
        Self {
            fields: sample
                .keys()
                .filter(|key| *key != ID_FIELD)
                .map(str::to_string)
                .collect(),
        }
    }

    /// Field names in prompt order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of editable fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the sample had no editable fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
