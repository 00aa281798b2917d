//! Domain error types for the calculator module.

use calculator_sdk::CalculatorError;
use thiserror::Error;

/// Domain-level errors for the calculator module.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The divisor was zero; `dividend` is kept for diagnostics.
    #[error("cannot divide {dividend} by zero")]
    DivisionByZero { dividend: f64 },
}

impl DomainError {
    /// Creates a `DivisionByZero` error.
    #[must_use]
    pub const fn division_by_zero(dividend: f64) -> Self {
        Self::DivisionByZero { dividend }
    }
}

impl From<DomainError> for CalculatorError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::DivisionByZero { .. } => Self::DivisionByZero,
        }
    }
}
