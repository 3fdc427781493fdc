//! Datastore Module
//!
//! The facade that ties the record codec, query compiler, and paginated
//! executor together over a [`StoreClient`].
//!
//! ## Responsibilities
//! - Encode and write records, honoring the consistency-wait setting
//! - Compile and execute queries, decoding results into field rows
//! - Apply partial updates and deletes with single-item semantics
//!
//! ## Consistency Model
//! Batch operations run item-by-item in caller order with no atomicity
//! across items: a failure partway through leaves the earlier writes in
//! place, and the caller decides whether to retry the remainder.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::codec::TypedValue;
use crate::config::Config;
use crate::error::{Result, SableError};
use crate::query::{compile, Condition, Operator, Query};
use crate::record::{self, Record, VersionRegistry};
use crate::schema::{ItemKey, PropertyDescriptor, RecordInput};
use crate::store::{self, StoreClient, WaitPolicy, WriteMode};

/// Result of a read: decoded rows plus the conditions the store could
/// not evaluate
#[derive(Debug, Clone)]
pub struct ReadResult {
    /// One property-name → value mapping per matched record
    pub rows: Vec<BTreeMap<String, TypedValue>>,

    /// Conditions compiled out as unsupported; the caller must filter
    /// these in memory or treat the read as over-matching
    pub unsupported: Vec<Condition>,
}

/// A datastore bound to one domain of an attribute store
pub struct Datastore<C: StoreClient> {
    client: C,
    config: Config,
    registry: VersionRegistry,
}

impl<C: StoreClient> Datastore<C> {
    /// Create a datastore with the standard version registry
    pub fn new(client: C, config: Config) -> Self {
        Self::with_registry(client, config, VersionRegistry::standard())
    }

    /// Create a datastore with an explicit version registry
    pub fn with_registry(client: C, config: Config, registry: VersionRegistry) -> Self {
        Self {
            client,
            config,
            registry,
        }
    }

    /// The configuration this datastore was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying store client
    pub fn client(&self) -> &C {
        &self.client
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Encode and write records, one item at a time
    ///
    /// Returns the number of records written. With
    /// `wait_for_consistency` enabled, blocks after each write until
    /// the item is visible to reads.
    pub fn create(&self, inputs: &[RecordInput]) -> Result<usize> {
        let started = Instant::now();
        let mut created = 0;

        for input in inputs {
            let encoded = record::encode(input, self.config.newline_escaping)?;
            self.client.put_attributes(
                &self.config.domain,
                &encoded.item_name,
                &encoded.writable,
                WriteMode::Merge,
            )?;

            if self.config.wait_for_consistency {
                self.wait_until_visible(&encoded.item_name)?;
            }
            created += 1;
        }

        tracing::debug!(
            created,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "INSERT"
        );
        Ok(created)
    }

    /// Apply a partial attribute update to each target item
    ///
    /// Attributes that encode to concrete values are written in replace
    /// mode; attributes that encode to null are removed from the items.
    /// The scoping query must use equality conditions only.
    pub fn update(
        &self,
        attributes: &[(String, TypedValue)],
        targets: &[ItemKey],
        query: &Query,
    ) -> Result<usize> {
        self.require_equality_only(query, "update")?;

        let started = Instant::now();
        let (writable, deletable) =
            record::encode_attributes(attributes, self.config.newline_escaping)?;

        let mut updated = 0;
        for target in targets {
            let item_name = record::item_name_for_keys(&target.type_name, &target.keys);
            if !writable.is_empty() {
                self.client.put_attributes(
                    &self.config.domain,
                    &item_name,
                    &writable,
                    WriteMode::Replace,
                )?;
            }
            if !deletable.is_empty() {
                self.client
                    .delete_attributes(&self.config.domain, &item_name, &deletable)?;
            }
            updated += 1;
        }

        tracing::debug!(
            updated,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "UPDATE"
        );
        Ok(updated)
    }

    /// Delete each target item entirely
    ///
    /// The scoping query must use equality conditions only.
    pub fn delete(&self, targets: &[ItemKey], query: &Query) -> Result<usize> {
        self.require_equality_only(query, "delete")?;

        let started = Instant::now();
        let mut deleted = 0;

        for target in targets {
            let item_name = record::item_name_for_keys(&target.type_name, &target.keys);
            self.client.delete_item(&self.config.domain, &item_name)?;
            deleted += 1;
        }

        tracing::debug!(
            deleted,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "DELETE"
        );
        Ok(deleted)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Execute a query and project each matched record onto `fields`
    pub fn read(&self, query: &Query, fields: &[PropertyDescriptor]) -> Result<ReadResult> {
        let (records, unsupported) = self.select_records(query)?;

        let rows = records
            .iter()
            .map(|record| record.project(fields))
            .collect();

        Ok(ReadResult { rows, unsupported })
    }

    /// Execute a query and decode the matched records without projection
    pub fn select_records(&self, query: &Query) -> Result<(Vec<Record>, Vec<Condition>)> {
        let started = Instant::now();
        let compiled = compile(query, &self.config.domain)?;

        if !compiled.unsupported.is_empty() {
            tracing::warn!(
                count = compiled.unsupported.len(),
                "query has conditions the store dialect cannot evaluate"
            );
        }

        let items = store::execute(&self.client, &compiled)?;
        let records = items
            .into_iter()
            .map(|(item_name, attributes)| {
                Record::from_wire_map(item_name, attributes, &self.registry)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            matched = records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "SELECT"
        );
        Ok((records, compiled.unsupported))
    }

    /// Count the records matching a query
    pub fn count(&self, query: &Query) -> Result<usize> {
        let compiled = compile(query, &self.config.domain)?;
        store::count(&self.client, &compiled)
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Block until a just-written item is visible to reads
    fn wait_until_visible(&self, item_name: &str) -> Result<()> {
        let policy = WaitPolicy::new(
            Duration::from_millis(self.config.consistency_poll_ms),
            Duration::from_millis(self.config.consistency_ceiling_ms),
        );

        store::wait_for_visibility(policy, || {
            let attributes = self
                .client
                .get_attributes(&self.config.domain, item_name)?;
            Ok(!attributes.is_empty())
        })
    }

    /// Collection-scoped mutations only support equality conditions
    fn require_equality_only(&self, query: &Query, operation: &str) -> Result<()> {
        let non_equality = query
            .conditions
            .iter()
            .any(|condition| condition.operator != Operator::Equals);

        if non_equality {
            return Err(SableError::NotImplemented(format!(
                "only equality conditions are supported on {}",
                operation
            )));
        }
        Ok(())
    }
}
