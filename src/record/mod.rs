//! Record Module
//!
//! Encoding and decoding of whole items against the store's native
//! attribute-map shape.
//!
//! ## Wire Shape
//! ```text
//! item name (SHA-1 hex) ──► ┌──────────────────┬─────────────────────┐
//!                           │ attribute name   │ ordered value list  │
//!                           ├──────────────────┼─────────────────────┤
//!                           │ "simpledb_type"  │ ["products"]        │
//!                           │ "__dm_metadata"  │ ["v01.01.00"]       │
//!                           │ "name"           │ ["Widget"]          │
//!                           │ "notes"          │ ["0000:...", ...]   │
//!                           └──────────────────┴─────────────────────┘
//! ```
//!
//! A logical scalar is a one-element list; a deleted value is the
//! absence of its key. Three format generations share this shape and
//! differ only in coercion rules; the version registry dispatches
//! between them.

mod version;
mod decoder;
mod encoder;

pub use version::{resolve_version, DecodeRules, VersionRegistry, CURRENT_VERSION, OLDEST_VERSION};
pub use decoder::Record;
pub use encoder::{encode, encode_attributes, item_name_for_keys, EncodedRecord};

use std::collections::BTreeMap;

/// The store's native item representation: attribute name → ordered
/// list of string values
pub type AttributeMap = BTreeMap<String, Vec<String>>;

/// Reserved attribute holding free-form metadata tags, one of which may
/// be a format version stamp
pub const METADATA_KEY: &str = "__dm_metadata";

/// Reserved attribute holding the logical record type name; every query
/// is scoped by it
pub const TYPE_KEY: &str = "simpledb_type";

/// All reserved attribute names, excluded from field projection
pub const META_KEYS: [&str; 2] = [METADATA_KEY, TYPE_KEY];
