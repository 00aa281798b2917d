//! Error types for the calculator module.

use thiserror::Error;

/// Errors surfaced to consumers of the `calculator` module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The divisor of a division was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An operation name or symbol could not be recognised.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

impl CalculatorError {
    /// Creates an `UnknownOperation` error.
    #[must_use]
    pub fn unknown_operation(op: impl Into<String>) -> Self {
        Self::UnknownOperation(op.into())
    }

    /// Returns `true` if this is a `DivisionByZero` error.
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }

    /// Returns `true` if this is an `UnknownOperation` error.
    #[must_use]
    pub const fn is_unknown_operation(&self) -> bool {
        matches!(self, Self::UnknownOperation(_))
    }
}
