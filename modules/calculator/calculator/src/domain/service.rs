//! Domain service for calculator
//!
//! Contains the core arithmetic logic. All operations work on IEEE-754
//! `f64` values; non-finite operands propagate per IEEE rules.

use calculator_sdk::Operation;
use tracing::{debug, warn};

use super::error::DomainError;

/// Stateless domain service that performs the four binary operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Add two numbers and return the sum.
    #[must_use]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        a + b
    }

    /// Subtract `b` from `a`.
    #[must_use]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        a - b
    }

    /// Multiply two numbers.
    #[must_use]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        a * b
    }

    /// Divide `a` by `b`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when `b` compares equal to zero, which
    /// covers both `0.0` and `-0.0`.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        if b == 0.0 {
            warn!(a, "rejected division by zero");
            return Err(DomainError::division_by_zero(a));
        }
        debug!(a, b, "performing division");
        Ok(a / b)
    }

    /// Dispatch to the operation named by `op`.
    ///
    /// # Errors
    ///
    /// Propagates `DivisionByZero` from [`Service::divide`].
    pub fn evaluate(&self, op: Operation, a: f64, b: f64) -> Result<f64, DomainError> {
        match op {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
        }
    }
}
