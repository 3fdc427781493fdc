//! Format version resolution and the decode-rules registry
//!
//! Records carry an optional version stamp (`vNN.NN.NN`) among their
//! metadata tags. Each version keeps the same storage shape; what
//! changes between generations is a small set of coercion rules,
//! captured here as [`DecodeRules`] variants looked up by tag.
//!
//! The registry is constructed once, up front, and read-only after
//! that. Decoding an unknown tag is fatal: it means the data on disk
//! was written by a newer generation than the running code.

use std::collections::BTreeMap;

use super::{AttributeMap, METADATA_KEY};

/// Version written by the current encoder
pub const CURRENT_VERSION: &str = "01.01.00";

/// Version assumed for records with no stamp
pub const OLDEST_VERSION: &str = "00.00.00";

/// Coercion behavior of one format generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeRules {
    /// Replace the `[[[NEWLINE]]]` sentinel with real newlines in
    /// character-string results. Only the oldest format does this;
    /// later formats store raw characters.
    pub restore_legacy_newlines: bool,
}

/// Registry of decode rules keyed by version tag
///
/// Populated explicitly before any decode call and never mutated
/// afterwards; safe to share for concurrent reads.
#[derive(Debug, Clone)]
pub struct VersionRegistry {
    rules: BTreeMap<String, DecodeRules>,
}

impl VersionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Registry covering every supported format generation
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(
            OLDEST_VERSION,
            DecodeRules {
                restore_legacy_newlines: true,
            },
        );
        registry.register(
            "01.00.00",
            DecodeRules {
                restore_legacy_newlines: false,
            },
        );
        registry.register(
            CURRENT_VERSION,
            DecodeRules {
                restore_legacy_newlines: false,
            },
        );
        registry
    }

    /// Register decode rules for a version tag
    pub fn register(&mut self, version: impl Into<String>, rules: DecodeRules) {
        self.rules.insert(version.into(), rules);
    }

    /// Look up the rules for a version tag
    pub fn rules_for(&self, version: &str) -> Option<DecodeRules> {
        self.rules.get(version).copied()
    }
}

impl Default for VersionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

// =============================================================================
// Stamp Resolution
// =============================================================================

/// Resolve the format version of a raw attribute map
///
/// Scans the metadata attribute for the first entry shaped like a
/// version stamp and returns its tag. A record with no stamp (or only
/// malformed stamps) is legacy data, never an error: it resolves to
/// [`OLDEST_VERSION`].
pub fn resolve_version(attributes: &AttributeMap) -> &str {
    attributes
        .get(METADATA_KEY)
        .into_iter()
        .flatten()
        .find_map(|entry| parse_version_stamp(entry))
        .unwrap_or(OLDEST_VERSION)
}

/// Parse a metadata entry of the form `vNN.NN.NN`, returning the tag
/// without its leading `v`
fn parse_version_stamp(entry: &str) -> Option<&str> {
    let tag = entry.strip_prefix('v')?;
    let bytes = tag.as_bytes();
    if bytes.len() != 8 {
        return None;
    }
    let well_formed = bytes.iter().enumerate().all(|(i, &b)| match i {
        2 | 5 => b == b'.',
        _ => b.is_ascii_digit(),
    });
    well_formed.then_some(tag)
}
