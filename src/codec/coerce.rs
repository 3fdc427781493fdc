//! Value coercion
//!
//! Maps the raw ordered value list of an attribute, plus the semantic
//! type the caller declared for it, into a typed application value.
//!
//! The semantic type is an explicit tag supplied at the API boundary;
//! the codec never infers it from the runtime shape of the data.

use serde::{Deserialize, Serialize};

use super::chunk;

/// Semantic classification of a property, declared by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SemanticType {
    /// Free-form text; may be chunked on the wire
    CharacterString,

    /// Ordered list of strings; never chunked
    Sequence,

    /// Any other single-valued primitive, carried as its string form
    Scalar,
}

/// A typed value produced by decoding or consumed by encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypedValue {
    /// Absent or deleted value
    Null,

    /// Character string (reassembled if it was chunked)
    Text(String),

    /// Sequence value, in stored order
    List(Vec<String>),

    /// Scalar in its string representation
    Scalar(String),
}

impl TypedValue {
    /// Whether this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, TypedValue::Null)
    }

    /// The text content, if this is a `Text` value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TypedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The list content, if this is a `List` value
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            TypedValue::List(v) => Some(v),
            _ => None,
        }
    }

    /// The scalar content, if this is a `Scalar` value
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            TypedValue::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

/// Coerce a raw value list into a typed value
///
/// - `CharacterString`: zero values → `Null`; one value → that string;
///   more than one → fragments, reassembled via [`chunk::join`]
/// - `Sequence`: the raw ordered list, unchanged
/// - `Scalar`: the first value only (extra values are ignored, not an
///   error — multivalued scalars are legacy data)
pub fn coerce(values: &[String], target: SemanticType) -> TypedValue {
    match target {
        SemanticType::CharacterString => match values {
            [] => TypedValue::Null,
            [single] => TypedValue::Text(single.clone()),
            many => TypedValue::Text(chunk::join(many)),
        },
        SemanticType::Sequence => TypedValue::List(values.to_vec()),
        SemanticType::Scalar => match values.first() {
            Some(first) => TypedValue::Scalar(first.clone()),
            None => TypedValue::Null,
        },
    }
}
