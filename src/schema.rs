//! Schema descriptors — the collaborator contract
//!
//! The ORM (or any other caller) describes its models to the core with
//! these types: a semantic classification per property, the ordered key
//! values per item, and the typed attribute set of a record to write.
//! The core never reflects over caller types; everything it needs is
//! carried explicitly here.

use serde::{Deserialize, Serialize};

use crate::codec::{SemanticType, TypedValue};

/// One property of a logical record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Application-level property name (projection output key)
    pub name: String,

    /// Stored attribute name
    pub field: String,

    /// Semantic classification, decided by the caller
    pub semantic: SemanticType,
}

impl PropertyDescriptor {
    /// Descriptor whose stored name equals its property name
    pub fn new(name: impl Into<String>, semantic: SemanticType) -> Self {
        let name = name.into();
        Self {
            field: name.clone(),
            name,
            semantic,
        }
    }

    /// Descriptor with distinct property and stored names
    pub fn with_field(
        name: impl Into<String>,
        field: impl Into<String>,
        semantic: SemanticType,
    ) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            semantic,
        }
    }
}

/// Identity of one stored item: its type plus its key attribute values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemKey {
    /// Logical record type name
    pub type_name: String,

    /// Key attribute (name, value) pairs; order does not matter, the
    /// encoder sorts by name before hashing
    pub keys: Vec<(String, String)>,
}

impl ItemKey {
    pub fn new(type_name: impl Into<String>, keys: Vec<(String, String)>) -> Self {
        Self {
            type_name: type_name.into(),
            keys,
        }
    }
}

/// A full record to write: identity plus typed attribute values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordInput {
    /// Logical record type name
    pub type_name: String,

    /// Key attribute (name, value) pairs
    pub keys: Vec<(String, String)>,

    /// Attribute values, each carrying its semantic tag
    pub attributes: Vec<(String, TypedValue)>,
}

impl RecordInput {
    pub fn new(
        type_name: impl Into<String>,
        keys: Vec<(String, String)>,
        attributes: Vec<(String, TypedValue)>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            keys,
            attributes,
        }
    }

    /// The identity portion of this record
    pub fn item_key(&self) -> ItemKey {
        ItemKey {
            type_name: self.type_name.clone(),
            keys: self.keys.clone(),
        }
    }
}
