//! Filter matching: structural equality over JSON values and the subset predicate used by
//! every filtered query.
use crate::types::Document;
use crate::{RdocsError, Result};
use serde_json::{Number, Value};

/// Recursive structural equality over JSON values.
///
/// Scalars compare strictly: values of different kinds are never equal and numbers compare by
/// numeric value, so `18` equals `18.0`. Arrays compare element by element in order and must have
/// the same length. Objects must have identical key sets with recursively equal values; key
/// order is irrelevant.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// A document-shaped subset predicate.
///
/// A document matches when every field of the filter is present on the document and equal to it
/// under [`values_equal`]. Fields the filter does not mention are ignored, so the empty filter
/// matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter(Document);

impl Filter {
    /// A filter with no fields, matching every document.
    pub fn all() -> Self {
        Self(Document::new())
    }

    /// Builds a filter from a JSON value, which must be an object.
    pub fn new(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(RdocsError::InvalidFilter(format!(
                "expected a JSON object, got {}",
                kind_of(&other)
            ))),
        }
    }

    /// Returns `true` if the filter has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the fields this filter tests.
    pub fn fields(&self) -> &Document {
        &self.0
    }

    /// Tests a document against every field of the filter.
    pub fn matches(&self, document: &Document) -> bool {
        self.0.iter().all(|(field, expected)| {
            document
                .get(field)
                .is_some_and(|actual| values_equal(expected, actual))
        })
    }
}

impl From<Document> for Filter {
    fn from(fields: Document) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for Filter {
    type Error = RdocsError;

    fn try_from(value: Value) -> Result<Self> {
        Self::new(value)
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
