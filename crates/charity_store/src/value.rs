//! Dynamic document value type.

use crate::document::Document;
use mongodb::bson::oid::ObjectId;
use std::fmt;

/// A dynamic field value.
///
/// Values typed in at the console only ever become [`Value::Integer`],
/// [`Value::Text`], or an [`Value::Array`] of text. The remaining variants
/// exist so that values read back from a store survive a round-trip
/// unchanged: writing a value back must produce the exact same stored
/// representation, otherwise the store reports a modification.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit signed integer as stored by the backend.
    Int32(i32),
    /// Signed integer (full i64 range).
    Integer(i64),
    /// Double precision float.
    Double(f64),
    /// Text string (UTF-8).
    Text(String),
    /// Array of values.
    Array(Vec<Value>),
    /// Embedded document.
    Document(Document),
    /// Store-assigned identifier.
    ObjectId(ObjectId),
    /// UTC timestamp in milliseconds since the Unix epoch.
    DateTime(i64),
    /// Opaque binary data.
    Binary(Vec<u8>),
}

impl Value {
    /// Get this value as an integer, if it is one of the integer variants.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Int32(n) => Some(i64::from(*n)),
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as an array, if it is one.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns true when this stored value satisfies an equality query.
    ///
    /// Follows document-store equality: numbers compare by value across
    /// integer widths and doubles, and an array matches when the query
    /// equals the whole array or any one of its elements.
    pub fn matches_query(&self, query: &Value) -> bool {
        if self.loosely_eq(query) {
            return true;
        }
        match self {
            Value::Array(items) => items.iter().any(|item| item.loosely_eq(query)),
            _ => false,
        }
    }

    fn loosely_eq(&self, other: &Value) -> bool {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.eq_numeric(b),
            _ => self == other,
        }
    }

    fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int32(n) => Some(Number::Int(i64::from(*n))),
            Value::Integer(n) => Some(Number::Int(*n)),
            Value::Double(d) => Some(Number::Float(*d)),
            _ => None,
        }
    }

    /// Converts to the form a store keeps: integers that fit in 32 bits
    /// narrow to [`Value::Int32`], recursively through arrays and embedded
    /// documents.
    ///
    /// Console input always coerces to [`Value::Integer`], so writing `"1"`
    /// back over a stored `Int32(1)` must compare equal after this step.
    #[must_use]
    pub fn into_stored(self) -> Value {
        match self {
            Value::Integer(n) => i32::try_from(n).map_or(Value::Integer(n), Value::Int32),
            Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::into_stored).collect())
            }
            Value::Document(doc) => Value::Document(doc.into_stored()),
            other => other,
        }
    }

    /// Short name of this value's kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int32(_) => "int32",
            Value::Integer(_) => "int64",
            Value::Double(_) => "double",
            Value::Text(_) => "string",
            Value::Array(_) => "array",
            Value::Document(_) => "document",
            Value::ObjectId(_) => "objectId",
            Value::DateTime(_) => "date",
            Value::Binary(_) => "binary",
        }
    }
}

#[derive(Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[allow(clippy::cast_precision_loss)]
    fn eq_numeric(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Int(i), Number::Float(f)) | (Number::Float(f), Number::Int(i)) => {
                f.fract() == 0.0 && (i as f64) == f
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int32(n) => write!(f, "{n}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Double(d) => write!(f, "{d:?}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            // Nested documents always render compactly.
            Value::Document(doc) => write!(f, "{doc}"),
            Value::ObjectId(id) => write!(f, "ObjectId(\"{id}\")"),
            Value::DateTime(ms) => write!(f, "DateTime({ms})"),
            Value::Binary(bytes) => {
                f.write_str("Binary(\"")?;
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                f.write_str("\")")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Value::ObjectId(id)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Document(doc)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}
