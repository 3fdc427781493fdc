//! Record encoder
//!
//! Converts a typed attribute set into the wire attribute-map shape:
//! stringifies scalars, chunks oversized strings, marks empty or null
//! values for deletion, and derives the deterministic item identifier.

use sha1::{Digest, Sha1};

use crate::codec::{split as chunk_split, TypedValue, CHUNK_PAYLOAD_SIZE, NEWLINE_SENTINEL};
use crate::error::Result;
use crate::schema::RecordInput;

use super::version::CURRENT_VERSION;
use super::{AttributeMap, METADATA_KEY, TYPE_KEY};

/// The wire-ready form of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRecord {
    /// Attributes to write, in the store's native shape
    pub writable: AttributeMap,

    /// Attribute names whose values must be removed instead of stored
    pub deletable: Vec<String>,

    /// Deterministic item identifier (SHA-1 hex digest)
    pub item_name: String,
}

/// Encode a typed record into its wire form
///
/// Injects the type discriminator and a current-version metadata stamp,
/// then partitions the caller's attributes: concrete values into
/// `writable`, null/empty values into `deletable`. A
/// `ChunkLimitExceeded` from the chunker aborts the whole encode.
pub fn encode(input: &RecordInput, escape_newlines: bool) -> Result<EncodedRecord> {
    let (mut writable, deletable) = encode_attributes(&input.attributes, escape_newlines)?;

    writable.insert(TYPE_KEY.to_string(), vec![input.type_name.clone()]);
    writable.insert(
        METADATA_KEY.to_string(),
        vec![format!("v{}", CURRENT_VERSION)],
    );

    let item_name = item_name_for_keys(&input.type_name, &input.keys);

    Ok(EncodedRecord {
        writable,
        deletable,
        item_name,
    })
}

/// Encode a bare attribute set (no discriminator, no identifier)
///
/// Used by partial updates, where the attributes apply to existing
/// items whose identifiers are already known.
pub fn encode_attributes(
    attributes: &[(String, TypedValue)],
    escape_newlines: bool,
) -> Result<(AttributeMap, Vec<String>)> {
    let mut writable = AttributeMap::new();
    let mut deletable = Vec::new();

    for (name, value) in attributes {
        match value {
            TypedValue::Text(text) if !text.is_empty() => {
                writable.insert(name.clone(), encode_text(text, escape_newlines)?);
            }
            TypedValue::List(values) if !values.is_empty() => {
                writable.insert(name.clone(), values.clone());
            }
            TypedValue::Scalar(scalar) => {
                writable.insert(name.clone(), vec![scalar.clone()]);
            }
            // Null, empty text, empty list: absence of a value is
            // expressed by removing the attribute, not storing it
            _ => deletable.push(name.clone()),
        }
    }

    Ok((writable, deletable))
}

/// Derive the deterministic item identifier for a record
///
/// Key attributes are sorted by name so that the same logical key
/// always hashes identically, regardless of declaration order.
pub fn item_name_for_keys(type_name: &str, keys: &[(String, String)]) -> String {
    let mut sorted: Vec<&(String, String)> = keys.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let joined = sorted
        .iter()
        .map(|(_, value)| value.as_str())
        .collect::<Vec<_>>()
        .join("-");

    let mut hasher = Sha1::new();
    hasher.update(type_name.as_bytes());
    hasher.update(b"+");
    hasher.update(joined.as_bytes());
    hex::encode(hasher.finalize())
}

/// Encode one character string into its stored value list
fn encode_text(text: &str, escape_newlines: bool) -> Result<Vec<String>> {
    let stored = if escape_newlines {
        text.replace('\n', NEWLINE_SENTINEL)
    } else {
        text.to_string()
    };

    if stored.len() > CHUNK_PAYLOAD_SIZE {
        chunk_split(&stored)
    } else {
        Ok(vec![stored])
    }
}
