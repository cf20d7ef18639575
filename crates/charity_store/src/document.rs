//! Schema-less document type.

use crate::value::Value;
use std::fmt;

/// Name of the reserved identifier field.
pub const ID_FIELD: &str = "_id";

/// An insertion-ordered mapping from field name to [`Value`].
///
/// Field order is preserved exactly as read from the store or as inserted,
/// so prompts derived from a document follow the document's own layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    fields: Vec<(String, Value)>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document from `(field, value)` pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect()
    }

    /// Sets a field, replacing an existing value in place.
    ///
    /// Returns the previous value if the field existed.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == field) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((field, value));
                None
            }
        }
    }

    /// Inserts a field at the front of the document.
    ///
    /// Used to place a freshly assigned identifier first.
    pub fn insert_first(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        self.fields.retain(|(k, _)| *k != field);
        self.fields.insert(0, (field, value.into()));
    }

    /// Looks up a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == field).map(|(_, v)| v)
    }

    /// Returns true if the field is present.
    pub fn contains_key(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Returns the document identifier, if present.
    pub fn id(&self) -> Option<&Value> {
        self.get(ID_FIELD)
    }

    /// Iterates over field names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over `(field, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Applies [`Value::into_stored`] to every field.
    #[must_use]
    pub fn into_stored(self) -> Document {
        Document {
            fields: self
                .fields
                .into_iter()
                .map(|(k, v)| (k, v.into_stored()))
                .collect(),
        }
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut doc = Document::new();
        for (k, v) in iter {
            doc.insert(k, v);
        }
        doc
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Compact form renders `{ a: 1, b: "x" }`; the alternate form (`{:#}`)
/// puts each top-level field on its own line.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            return f.write_str("{}");
        }
        if f.alternate() {
            f.write_str("{\n")?;
            for (k, v) in &self.fields {
                writeln!(f, "  {k}: {v},")?;
            }
            f.write_str("}")
        } else {
            f.write_str("{ ")?;
            for (i, (k, v)) in self.fields.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{k}: {v}")?;
            }
            f.write_str(" }")
        }
    }
}
