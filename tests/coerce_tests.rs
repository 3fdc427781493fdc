//! Value Coercion Tests
//!
//! Tests for mapping raw value lists plus semantic tags into typed
//! values.

use sablekv::codec::{coerce, SemanticType, TypedValue};

// =============================================================================
// CharacterString Tests
// =============================================================================

#[test]
fn test_character_string_absent_is_null() {
    let value = coerce(&[], SemanticType::CharacterString);
    assert_eq!(value, TypedValue::Null);
}

#[test]
fn test_character_string_single_value() {
    let values = vec!["plain".to_string()];
    let value = coerce(&values, SemanticType::CharacterString);
    assert_eq!(value, TypedValue::Text("plain".to_string()));
}

#[test]
fn test_character_string_multiple_values_reassembled() {
    let values = vec!["0001:tail".to_string(), "0000:head ".to_string()];
    let value = coerce(&values, SemanticType::CharacterString);
    assert_eq!(value, TypedValue::Text("head tail".to_string()));
}

#[test]
fn test_character_string_legacy_unchunked_values() {
    // Values written outside the codec have no prefixes; the raw
    // content must come back unchanged
    let values = vec!["first".to_string(), "second".to_string()];
    let value = coerce(&values, SemanticType::CharacterString);
    assert_eq!(value, TypedValue::Text("firstsecond".to_string()));
}

// =============================================================================
// Sequence Tests
// =============================================================================

#[test]
fn test_sequence_returns_raw_list() {
    let values = vec!["0001:a".to_string(), "0000:b".to_string()];
    let value = coerce(&values, SemanticType::Sequence);
    // Sequences are never chunked, so no join and no reordering
    assert_eq!(value, TypedValue::List(values));
}

#[test]
fn test_sequence_empty_list() {
    let value = coerce(&[], SemanticType::Sequence);
    assert_eq!(value, TypedValue::List(vec![]));
}

// =============================================================================
// Scalar Tests
// =============================================================================

#[test]
fn test_scalar_takes_first_value() {
    let values = vec!["42".to_string()];
    let value = coerce(&values, SemanticType::Scalar);
    assert_eq!(value, TypedValue::Scalar("42".to_string()));
}

#[test]
fn test_scalar_ignores_extra_values() {
    let values = vec!["1".to_string(), "2".to_string(), "3".to_string()];
    let value = coerce(&values, SemanticType::Scalar);
    assert_eq!(value, TypedValue::Scalar("1".to_string()));
}

#[test]
fn test_scalar_absent_is_null() {
    let value = coerce(&[], SemanticType::Scalar);
    assert_eq!(value, TypedValue::Null);
}
