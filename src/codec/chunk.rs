//! Chunked string codec
//!
//! Splits strings longer than the store's per-value size limit into
//! ordered fragments, and reassembles them on read.
//!
//! Fragments carry a `NNNN:` prefix so reassembly can sort numerically
//! regardless of the order the store returns them in. Strings chunked
//! this way lose full-text matching in queries, since the split can
//! fall anywhere.

use crate::error::{Result, SableError};

/// Max payload bytes per fragment: 1024 minus the `NNNN:` prefix
pub const CHUNK_PAYLOAD_SIZE: usize = 1019;

/// Fragment count ceiling (the store allows 256 values per attribute)
pub const MAX_CHUNKS: usize = 256;

// =============================================================================
// Split
// =============================================================================

/// Split a string into order-prefixed fragments
///
/// Each fragment holds at most [`CHUNK_PAYLOAD_SIZE`] bytes of the
/// original, backing off to the nearest character boundary so every
/// fragment stays valid UTF-8. Indices are assigned sequentially from 0.
///
/// Fails with `ChunkLimitExceeded` when the fragment count would reach
/// [`MAX_CHUNKS`].
pub fn split(value: &str) -> Result<Vec<String>> {
    let mut fragments = Vec::new();
    let mut rest = value;

    while !rest.is_empty() {
        if fragments.len() + 1 >= MAX_CHUNKS {
            return Err(SableError::ChunkLimitExceeded {
                chunks: fragments.len() + 1,
                max: MAX_CHUNKS,
            });
        }

        let mut end = CHUNK_PAYLOAD_SIZE.min(rest.len());
        while !rest.is_char_boundary(end) {
            end -= 1;
        }

        let (payload, tail) = rest.split_at(end);
        fragments.push(format!("{:04}:{}", fragments.len(), payload));
        rest = tail;
    }

    Ok(fragments)
}

// =============================================================================
// Join
// =============================================================================

/// Reassemble fragments into the original string
///
/// Parses each fragment's leading numeric prefix up to the first colon,
/// sorts by parsed index ascending, and concatenates the payloads.
///
/// If any fragment lacks a parseable `NNNN:` prefix, the input is
/// returned unchanged (concatenated in arrival order): values written
/// outside the codec, or by versions that never chunked, must survive
/// a read untouched.
pub fn join(fragments: &[String]) -> String {
    let mut parsed: Vec<(u32, &str)> = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        match parse_fragment(fragment) {
            Some(pair) => parsed.push(pair),
            None => return fragments.concat(),
        }
    }

    parsed.sort_by_key(|&(index, _)| index);
    parsed.into_iter().map(|(_, payload)| payload).collect()
}

/// Parse a fragment into its numeric index and payload
///
/// Returns `None` when there is no colon or the prefix is not a number.
fn parse_fragment(fragment: &str) -> Option<(u32, &str)> {
    let (prefix, payload) = fragment.split_once(':')?;
    let index = prefix.parse::<u32>().ok()?;
    Some((index, payload))
}
