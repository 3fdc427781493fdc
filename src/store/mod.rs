//! Store Module
//!
//! The seam between the core and the underlying attribute store.
//!
//! ## Responsibilities
//! - Define the request/response surface the core needs ([`StoreClient`])
//! - Drive paginated retrieval over it ([`executor`])
//! - Poll for read-after-write visibility ([`consistency`])
//!
//! The core never performs network I/O itself; an embedding application
//! supplies a `StoreClient` backed by whatever transport it uses.

mod executor;
mod consistency;

pub use executor::{execute, count, DEFAULT_RESULT_CAP};
pub use consistency::{wait_for_visibility, WaitPolicy};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::AttributeMap;

/// One page of a select response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectPage {
    /// (item name, attribute map) pairs, in store order
    pub items: Vec<(String, AttributeMap)>,

    /// Continuation cursor; absent on the final page
    pub next_token: Option<String>,
}

/// How a put interacts with existing attribute values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteMode {
    /// Add values alongside whatever is already stored
    Merge,

    /// Replace existing values for the written attribute names
    Replace,
}

/// Abstract store request/response surface
///
/// All calls are synchronous; pagination is a strict data dependency
/// (each page's cursor comes from the previous response), so there is
/// nothing to parallelize at this layer.
pub trait StoreClient {
    /// Issue a select expression, optionally resuming from a cursor
    fn select(&self, expression: &str, next_token: Option<&str>) -> Result<SelectPage>;

    /// Write attribute values for one item
    fn put_attributes(
        &self,
        domain: &str,
        item_name: &str,
        attributes: &AttributeMap,
        mode: WriteMode,
    ) -> Result<()>;

    /// Remove specific attributes from one item
    fn delete_attributes(&self, domain: &str, item_name: &str, names: &[String]) -> Result<()>;

    /// Remove one item entirely
    fn delete_item(&self, domain: &str, item_name: &str) -> Result<()>;

    /// Fetch all attributes of one item; empty map when the item does
    /// not exist (or is not yet visible)
    fn get_attributes(&self, domain: &str, item_name: &str) -> Result<AttributeMap>;
}
