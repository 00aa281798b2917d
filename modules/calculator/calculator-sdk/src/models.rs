//! Public models for the `calculator` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `calculator` module and its consumers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalculatorError;

/// One of the four binary arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Lowercase name, identical to the serde representation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Infix symbol used when rendering a calculation.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns `true` for the only operation that can fail.
    #[must_use]
    pub const fn is_fallible(self) -> bool {
        matches!(self, Self::Divide)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    /// Accepts the operation name (case-insensitive) or its symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == trimmed || op.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CalculatorError::unknown_operation(trimmed))
    }
}

/// The record of one successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
    pub result: f64,
}

impl Calculation {
    #[must_use]
    pub const fn new(operation: Operation, a: f64, b: f64, result: f64) -> Self {
        Self {
            operation,
            a,
            b,
            result,
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.a,
            self.operation.symbol(),
            self.b,
            self.result
        )
    }
}
