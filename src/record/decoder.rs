//! Versioned record decoder
//!
//! A [`Record`] wraps one raw attribute map together with its resolved
//! format version and exposes typed reads over it. Records are built
//! fresh on every read and never mutated afterwards.

use std::collections::BTreeMap;

use crate::codec::{coerce, SemanticType, TypedValue, NEWLINE_SENTINEL};
use crate::error::{Result, SableError};
use crate::schema::PropertyDescriptor;

use super::version::{resolve_version, DecodeRules, VersionRegistry};
use super::{AttributeMap, TYPE_KEY};

/// A decoded item: name, raw attributes, and the format generation
/// that wrote them
#[derive(Debug, Clone)]
pub struct Record {
    item_name: String,
    attributes: AttributeMap,
    version: String,
    rules: DecodeRules,
}

impl Record {
    /// Build a record from a raw wire attribute map
    ///
    /// Resolves the version stamp and binds the matching decode rules.
    /// Fails with `UnknownFormatVersion` when no rules are registered
    /// for the detected version; such a record was written by code
    /// newer than this build and cannot be interpreted.
    pub fn from_wire_map(
        item_name: impl Into<String>,
        attributes: AttributeMap,
        registry: &VersionRegistry,
    ) -> Result<Self> {
        let version = resolve_version(&attributes).to_string();
        let rules = registry
            .rules_for(&version)
            .ok_or_else(|| SableError::UnknownFormatVersion(version.clone()))?;

        Ok(Self {
            item_name: item_name.into(),
            attributes,
            version,
            rules,
        })
    }

    /// The item's store-level identifier
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// The resolved format version tag
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The raw attribute map
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// The logical type name stored in the type discriminator, if any
    pub fn storage_name(&self) -> Option<&str> {
        self.attributes
            .get(TYPE_KEY)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Read one attribute as a typed value
    ///
    /// An absent attribute reads as an empty value list, which coerces
    /// to null (or an empty list for sequences) rather than raising.
    pub fn read(&self, attribute: &str, target: SemanticType) -> TypedValue {
        let values = self
            .attributes
            .get(attribute)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let value = coerce(values, target);
        self.apply_decode_rules(value)
    }

    /// Project the record onto a set of field descriptors
    ///
    /// Returns a mapping from property name to typed value; fields the
    /// record does not carry come back as null-equivalents.
    pub fn project(&self, fields: &[PropertyDescriptor]) -> BTreeMap<String, TypedValue> {
        fields
            .iter()
            .map(|property| {
                let value = self.read(&property.field, property.semantic);
                (property.name.clone(), value)
            })
            .collect()
    }

    /// Apply the version-specific coercion override
    fn apply_decode_rules(&self, value: TypedValue) -> TypedValue {
        if !self.rules.restore_legacy_newlines {
            return value;
        }
        match value {
            TypedValue::Text(text) => {
                TypedValue::Text(text.replace(NEWLINE_SENTINEL, "\n"))
            }
            other => other,
        }
    }
}
