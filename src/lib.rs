//! # SableKV
//!
//! A record codec and query compiler for schemaless, multivalued
//! key/attribute stores, with:
//! - Chunked storage of strings beyond the per-value size limit
//! - A multi-version record decoder spanning three format generations
//! - A query compiler targeting a restrictive select dialect
//! - Continuation-token pagination with deterministic termination
//!
//! ## Architecture Overview
//!
//! ```text
//!            write path                        read path
//! ┌─────────────────────────┐      ┌────────────────────────────┐
//! │     Record Encoder      │      │       Query Compiler       │
//! │ (chunking, item names)  │      │  (filter/sort/limit → SQL  │
//! └───────────┬─────────────┘      │         dialect)           │
//!             │                    └─────────────┬──────────────┘
//!             ▼                                  ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       StoreClient                            │
//! │          (caller-supplied transport, paginated)              │
//! └───────────────────────────┬─────────────────────────────────┘
//!                             │
//!                             ▼
//!             ┌───────────────────────────────┐
//!             │   Versioned Record Decoder    │
//!             │  (version registry, coercion) │
//!             └───────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod record;
pub mod query;
pub mod schema;
pub mod store;
pub mod datastore;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, SableError};
pub use config::Config;
pub use datastore::{Datastore, ReadResult};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of SableKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
