//! `CalculatorApi` trait definition.
//!
//! This trait defines the public API for the `calculator` module. Every
//! method is synchronous and free of side effects, so one client can be
//! shared across threads behind an `Arc<dyn CalculatorApi>`.

use crate::error::CalculatorError;
use crate::models::{Calculation, Operation};

/// Public API trait for the `calculator` module.
///
/// ```ignore
/// let client: Arc<dyn CalculatorApi> = calculator::local_client();
/// assert_eq!(client.add(2.0, 3.0), 5.0);
/// assert!(client.divide(1.0, 0.0).is_err());
/// ```
pub trait CalculatorApi: Send + Sync {
    /// Returns `a + b`.
    fn add(&self, a: f64, b: f64) -> f64;

    /// Returns `a - b`.
    fn subtract(&self, a: f64, b: f64) -> f64;

    /// Returns `a * b`.
    fn multiply(&self, a: f64, b: f64) -> f64;

    /// Returns the IEEE-754 quotient `a / b`.
    ///
    /// # Errors
    ///
    /// * `DivisionByZero` - If `b` is `0.0` or `-0.0`
    fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Evaluates `op` over the operands and records the outcome.
    ///
    /// # Errors
    ///
    /// * `DivisionByZero` - If `op` is `Divide` and `b` is zero
    fn calculate(&self, op: Operation, a: f64, b: f64) -> Result<Calculation, CalculatorError> {
        let result = match op {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
            Operation::Multiply => self.multiply(a, b),
            Operation::Divide => self.divide(a, b)?,
        };
        Ok(Calculation::new(op, a, b, result))
    }
}
