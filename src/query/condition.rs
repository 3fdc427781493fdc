//! Condition definitions
//!
//! A condition targets exactly one attribute with one operator and one
//! operand. Operator and operand are separate axes: the compiler checks
//! that the combination makes sense and fails hard on mismatches, since
//! those are programming errors rather than data errors.

use serde::{Deserialize, Serialize};

/// Filter operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    Like,
    NotLike,
    /// Membership in a finite set or a range
    Within,
    /// Regex match — not expressible in the dialect
    Matches,
    IsNull,
    IsNotNull,
}

/// Condition operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// No operand (null tests) or an explicit null comparison value
    None,

    /// Single comparison value
    Value(String),

    /// Finite set of values
    Set(Vec<String>),

    /// Value range; only inclusive ranges are expressible
    Range {
        low: String,
        high: String,
        inclusive: bool,
    },

    /// Regex pattern
    Pattern(String),
}

/// One filter condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub attribute: String,
    pub operator: Operator,
    pub operand: Operand,
}

impl Condition {
    pub fn new(attribute: impl Into<String>, operator: Operator, operand: Operand) -> Self {
        Self {
            attribute: attribute.into(),
            operator,
            operand,
        }
    }

    /// Equality against a value, or a null test when `value` is `None`
    pub fn equals(attribute: impl Into<String>, value: Option<String>) -> Self {
        let operand = match value {
            Some(v) => Operand::Value(v),
            None => Operand::None,
        };
        Self::new(attribute, Operator::Equals, operand)
    }

    /// Inequality against a value, or a not-null test when `value` is `None`
    pub fn not_equals(attribute: impl Into<String>, value: Option<String>) -> Self {
        let operand = match value {
            Some(v) => Operand::Value(v),
            None => Operand::None,
        };
        Self::new(attribute, Operator::NotEquals, operand)
    }

    /// Membership in a finite set
    pub fn within(attribute: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(attribute, Operator::Within, Operand::Set(values))
    }

    /// Membership in a range
    pub fn between(
        attribute: impl Into<String>,
        low: impl Into<String>,
        high: impl Into<String>,
        inclusive: bool,
    ) -> Self {
        Self::new(
            attribute,
            Operator::Within,
            Operand::Range {
                low: low.into(),
                high: high.into(),
                inclusive,
            },
        )
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Dialect keyword for this direction
    pub fn keyword(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

/// A single (attribute, direction) sort specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub attribute: String,
    pub direction: SortDirection,
}
