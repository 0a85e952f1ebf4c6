//! Vertex key value type.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Opaque, totally ordered, hashable identifier for a vertex.
///
/// Keys are compared by value and assumed unique across a dataset; the
/// engine never verifies uniqueness. Integer and text keys may coexist in
/// the same graph (integers order before text).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VertexKey {
    /// Numeric key.
    Int(i64),
    /// Textual key. Interned symbols from host environments map here.
    Text(String),
}

impl VertexKey {
    /// Returns the numeric value when the key is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            VertexKey::Int(value) => Some(*value),
            VertexKey::Text(_) => None,
        }
    }

    /// Returns the text value when the key is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            VertexKey::Int(_) => None,
            VertexKey::Text(value) => Some(value),
        }
    }
}

impl From<i64> for VertexKey {
    fn from(value: i64) -> Self {
        VertexKey::Int(value)
    }
}

impl From<&str> for VertexKey {
    fn from(value: &str) -> Self {
        VertexKey::Text(value.to_owned())
    }
}

impl From<String> for VertexKey {
    fn from(value: String) -> Self {
        VertexKey::Text(value)
    }
}

impl Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexKey::Int(value) => write!(f, "{value}"),
            VertexKey::Text(value) => write!(f, "{value}"),
        }
    }
}
