//! Error types for SableKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using SableError
pub type Result<T> = std::result::Result<T, SableError>;

/// Unified error type for SableKV operations
#[derive(Debug, Error)]
pub enum SableError {
    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Chunk limit exceeded: {chunks} fragments (max {max})")]
    ChunkLimitExceeded { chunks: usize, max: usize },

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Unknown record format version: {0}")]
    UnknownFormatVersion(String),

    // -------------------------------------------------------------------------
    // Query Errors
    // -------------------------------------------------------------------------
    #[error("Invalid query operator: {0}")]
    InvalidQueryOperator(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Store error: {0}")]
    Store(String),

    #[error("Consistency wait timed out after {waited_ms} ms")]
    ConsistencyTimeout { waited_ms: u64 },
}
