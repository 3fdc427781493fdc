//! Chunk Codec Tests
//!
//! Tests for splitting and reassembling oversized strings.

use sablekv::codec::{join, split, CHUNK_PAYLOAD_SIZE, MAX_CHUNKS};
use sablekv::SableError;

// =============================================================================
// Split Tests
// =============================================================================

#[test]
fn test_split_short_string_single_fragment() {
    let fragments = split("hello").unwrap();
    assert_eq!(fragments, vec!["0000:hello".to_string()]);
}

#[test]
fn test_split_empty_string() {
    let fragments = split("").unwrap();
    assert!(fragments.is_empty());
}

#[test]
fn test_split_exact_boundary() {
    let value = "x".repeat(CHUNK_PAYLOAD_SIZE);
    let fragments = split(&value).unwrap();
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].len(), 5 + CHUNK_PAYLOAD_SIZE);
}

#[test]
fn test_split_one_byte_past_boundary() {
    let value = "x".repeat(CHUNK_PAYLOAD_SIZE + 1);
    let fragments = split(&value).unwrap();
    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0], format!("0000:{}", "x".repeat(CHUNK_PAYLOAD_SIZE)));
    assert_eq!(fragments[1], "0001:x");
}

#[test]
fn test_split_assigns_sequential_indices() {
    let value = "y".repeat(CHUNK_PAYLOAD_SIZE * 3);
    let fragments = split(&value).unwrap();
    assert_eq!(fragments.len(), 3);
    assert!(fragments[0].starts_with("0000:"));
    assert!(fragments[1].starts_with("0001:"));
    assert!(fragments[2].starts_with("0002:"));
}

#[test]
fn test_split_fragments_respect_char_boundaries() {
    // é is two bytes; an odd payload size forces a boundary back-off
    let value = "é".repeat(CHUNK_PAYLOAD_SIZE);
    let fragments = split(&value).unwrap();
    for fragment in &fragments {
        let payload = fragment.split_once(':').unwrap().1;
        assert!(payload.len() <= CHUNK_PAYLOAD_SIZE);
    }
    assert_eq!(join(&fragments), value);
}

#[test]
fn test_split_chunk_limit() {
    // 255 fragments is the largest encodable string
    let largest = "z".repeat(CHUNK_PAYLOAD_SIZE * (MAX_CHUNKS - 1));
    assert_eq!(split(&largest).unwrap().len(), MAX_CHUNKS - 1);

    let too_big = "z".repeat(CHUNK_PAYLOAD_SIZE * (MAX_CHUNKS - 1) + 1);
    let result = split(&too_big);
    assert!(matches!(
        result,
        Err(SableError::ChunkLimitExceeded { .. })
    ));
}

// =============================================================================
// Join Tests
// =============================================================================

#[test]
fn test_join_sorts_by_numeric_index() {
    let fragments = vec!["0002:B".to_string(), "0001:A".to_string()];
    assert_eq!(join(&fragments), "AB");
}

#[test]
fn test_join_is_order_independent() {
    let fragments = vec![
        "0001:world".to_string(),
        "0000:hello ".to_string(),
        "0002:!".to_string(),
    ];
    assert_eq!(join(&fragments), "hello world!");
}

#[test]
fn test_join_unparseable_fragment_returns_input_unchanged() {
    // Legacy values with no chunk prefix must survive a read untouched
    let fragments = vec!["just some text".to_string()];
    assert_eq!(join(&fragments), "just some text");
}

#[test]
fn test_join_mixed_parseable_and_unparseable() {
    let fragments = vec!["0000:a".to_string(), "not a chunk".to_string()];
    assert_eq!(join(&fragments), "0000:anot a chunk");
}

#[test]
fn test_join_non_numeric_prefix_is_tolerated() {
    let fragments = vec!["abc:payload".to_string()];
    assert_eq!(join(&fragments), "abc:payload");
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_round_trip_small() {
    let value = "the quick brown fox";
    assert_eq!(join(&split(value).unwrap()), value);
}

#[test]
fn test_round_trip_large() {
    let value: String = (0..5000).map(|i| ((i % 26) as u8 + b'a') as char).collect();
    assert_eq!(join(&split(&value).unwrap()), value);
}

#[test]
fn test_round_trip_multibyte() {
    let value = "日本語のテキスト ".repeat(500);
    assert_eq!(join(&split(&value).unwrap()), value);
}

#[test]
fn test_round_trip_payload_containing_colons() {
    let value = format!("{}{}", "a:b:c:".repeat(300), "tail");
    assert_eq!(join(&split(&value).unwrap()), value);
}
