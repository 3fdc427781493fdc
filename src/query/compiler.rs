//! Query compiler
//!
//! Translates an abstract [`Query`] into the store's select dialect.
//! Every query is scoped to one logical type by pinning the type
//! discriminator; sorted attributes gain a mandatory `IS NOT NULL`
//! filter, as the dialect refuses to sort on nullable attributes.
//!
//! String operands are interpolated with embedded single quotes doubled
//! (`'` → `''`), the dialect's escape rule.

use crate::error::{Result, SableError};
use crate::record::TYPE_KEY;

use super::condition::{Condition, Operand, Operator};
use super::Query;

/// Placeholder operand for membership over an empty set; keeps the `IN`
/// clause syntactically valid while matching nothing
pub const EMPTY_SET_SENTINEL: &str = "__NULL__";

/// A query translated into the select dialect
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    /// Individual filter expressions, joined with `AND`
    pub filters: Vec<String>,

    /// `ORDER BY ...` clause, if the query sorts
    pub order: Option<String>,

    /// Result limit carried through for the executor
    pub limit: Option<usize>,

    /// Conditions the dialect cannot express; the caller must filter
    /// these in memory or reject the query
    pub unsupported: Vec<Condition>,

    domain: String,
}

impl CompiledQuery {
    /// Full select expression for fetching items
    pub fn select_expression(&self) -> String {
        let mut expression = format!("SELECT * FROM {}", self.domain);
        self.push_clauses(&mut expression);
        if let Some(limit) = self.limit {
            expression.push_str(&format!(" LIMIT {}", limit));
        }
        expression
    }

    /// Aggregate expression for counting items
    pub fn count_expression(&self) -> String {
        let mut expression = format!("SELECT count(*) FROM {}", self.domain);
        self.push_clauses(&mut expression);
        expression
    }

    fn push_clauses(&self, expression: &mut String) {
        if !self.filters.is_empty() {
            expression.push_str(" WHERE ");
            expression.push_str(&self.filters.join(" AND "));
        }
        if let Some(order) = &self.order {
            expression.push(' ');
            expression.push_str(order);
        }
    }
}

/// Compile a query against a domain
///
/// Fails with `InvalidQueryOperator` on operator/operand combinations
/// no caller should ever construct; inexpressible-but-legal conditions
/// (regex, exclusive ranges) land in the `unsupported` partition
/// instead.
pub fn compile(query: &Query, domain: &str) -> Result<CompiledQuery> {
    let mut filters = vec![format!("{} = {}", TYPE_KEY, quote(&query.type_name))];
    let mut unsupported = Vec::new();

    let order = query.sort.as_ref().map(|sort| {
        // The dialect only sorts attributes it knows to be non-null
        filters.push(format!("{} IS NOT NULL", sort.attribute));
        format!("ORDER BY {} {}", sort.attribute, sort.direction.keyword())
    });

    for condition in &query.conditions {
        match translate(condition)? {
            Translation::Filter(filter) => filters.push(filter),
            Translation::Unsupported => unsupported.push(condition.clone()),
        }
    }

    Ok(CompiledQuery {
        filters,
        order,
        limit: query.limit,
        unsupported,
        domain: domain.to_string(),
    })
}

/// Outcome of translating a single condition
enum Translation {
    Filter(String),
    Unsupported,
}

fn translate(condition: &Condition) -> Result<Translation> {
    let attr = &condition.attribute;

    let filter = match (&condition.operator, &condition.operand) {
        (Operator::Equals, Operand::Value(v)) => format!("{} = {}", attr, quote(v)),
        (Operator::Equals, Operand::None) => format!("{} IS NULL", attr),

        (Operator::NotEquals, Operand::Value(v)) => format!("{} != {}", attr, quote(v)),
        (Operator::NotEquals, Operand::None) => format!("{} IS NOT NULL", attr),

        (Operator::GreaterThan, Operand::Value(v)) => format!("{} > {}", attr, quote(v)),
        (Operator::GreaterOrEqual, Operand::Value(v)) => format!("{} >= {}", attr, quote(v)),
        (Operator::LessThan, Operand::Value(v)) => format!("{} < {}", attr, quote(v)),
        (Operator::LessOrEqual, Operand::Value(v)) => format!("{} <= {}", attr, quote(v)),

        (Operator::Like, Operand::Value(v)) => format!("{} like {}", attr, quote(v)),
        (Operator::NotLike, Operand::Value(v)) => format!("{} not like {}", attr, quote(v)),

        (Operator::Within, Operand::Set(values)) => {
            let quoted = if values.is_empty() {
                quote(EMPTY_SET_SENTINEL)
            } else {
                values.iter().map(|v| quote(v)).collect::<Vec<_>>().join(",")
            };
            format!("{} IN ({})", attr, quoted)
        }
        (Operator::Within, Operand::Range { low, high, inclusive }) => {
            if !inclusive {
                return Ok(Translation::Unsupported);
            }
            format!("{} between {} and {}", attr, quote(low), quote(high))
        }

        (Operator::Matches, _) => return Ok(Translation::Unsupported),

        (Operator::IsNull, Operand::None) => format!("{} IS NULL", attr),
        (Operator::IsNotNull, Operand::None) => format!("{} IS NOT NULL", attr),

        (operator, operand) => {
            return Err(SableError::InvalidQueryOperator(format!(
                "{:?} on {} with operand {:?}",
                operator, attr, operand
            )));
        }
    };

    Ok(Translation::Filter(filter))
}

/// Quote a string literal for the dialect, doubling embedded quotes
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
