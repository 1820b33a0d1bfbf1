//! # Operator Module
//!
//! The closed set of condition operators.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison applied between a resolved context field and a comparand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    Contains,
    NotContains,
    IsTrue,
    IsFalse,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "EQUALS",
            Operator::NotEquals => "NOT_EQUALS",
            Operator::GreaterThan => "GREATER_THAN",
            Operator::LessThan => "LESS_THAN",
            Operator::Contains => "CONTAINS",
            Operator::NotContains => "NOT_CONTAINS",
            Operator::IsTrue => "IS_TRUE",
            Operator::IsFalse => "IS_FALSE",
        }
    }

    /// Operators that ignore the condition's comparand
    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::IsTrue | Operator::IsFalse)
    }

    /// Operators that coerce both operands to numbers
    pub fn is_magnitude(&self) -> bool {
        matches!(self, Operator::GreaterThan | Operator::LessThan)
    }

    pub fn all() -> Vec<Operator> {
        vec![
            Operator::Equals,
            Operator::NotEquals,
            Operator::GreaterThan,
            Operator::LessThan,
            Operator::Contains,
            Operator::NotContains,
            Operator::IsTrue,
            Operator::IsFalse,
        ]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operator {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Operator::all()
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownOperator(s.to_string()))
    }
}
