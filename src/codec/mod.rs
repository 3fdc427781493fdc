//! Codec Module
//!
//! Value-level encoding rules shared by the read and write paths.
//!
//! ## Responsibilities
//! - Split oversized character strings into ordered fragments and
//!   reassemble them losslessly ([`chunk`])
//! - Coerce raw multivalued attribute data into typed application
//!   values ([`coerce`])
//!
//! ## Fragment Format
//! ```text
//! ┌────────────┬─────┬──────────────────────────────┐
//! │ Index (4)  │ ':' │ Payload (≤1019 bytes)        │
//! └────────────┴─────┴──────────────────────────────┘
//!   zero-padded         UTF-8 slice of the original
//! ```
//!
//! The store caps single attribute values at 1024 bytes and attribute
//! value lists at 256 entries; both limits shape the fragment design.

mod chunk;
mod coerce;

pub use chunk::{split, join, CHUNK_PAYLOAD_SIZE, MAX_CHUNKS};
pub use coerce::{coerce, SemanticType, TypedValue};

/// Sentinel token stored in place of newline characters.
///
/// The legacy transport splits multivalued strings on newlines and
/// reorders the pieces, so raw newlines cannot survive a write.
pub const NEWLINE_SENTINEL: &str = "[[[NEWLINE]]]";
