//! Query Module
//!
//! Abstract queries and their compilation into the store's select
//! dialect.
//!
//! ## Dialect
//! ```text
//! SELECT * FROM <domain> WHERE <cond> AND <cond> ... ORDER BY <attr> <dir> LIMIT <n>
//! SELECT count(*) FROM <domain> WHERE <cond> AND ...
//! ```
//!
//! The dialect is restrictive: no joins, single-attribute conditions,
//! at most one sort key, and a mandatory equality pin on the type
//! discriminator. Conditions the dialect cannot express are partitioned
//! out for the caller to handle in memory, never silently dropped.

mod condition;
mod compiler;

pub use condition::{Condition, Operand, Operator, SortDirection, SortSpec};
pub use compiler::{compile, CompiledQuery, EMPTY_SET_SENTINEL};

use serde::{Deserialize, Serialize};

/// An abstract query over one logical record type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Target type name; compiled into the discriminator pin
    pub type_name: String,

    /// Ordered filter conditions
    pub conditions: Vec<Condition>,

    /// Optional single sort key
    pub sort: Option<SortSpec>,

    /// Optional result limit
    pub limit: Option<usize>,
}

impl Query {
    /// Query for all records of a type
    pub fn for_type(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            conditions: Vec::new(),
            sort: None,
            limit: None,
        }
    }

    /// Append a condition
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Set the sort key
    pub fn sort(mut self, attribute: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec {
            attribute: attribute.into(),
            direction,
        });
        self
    }

    /// Set the result limit
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
