//! Local client implementing the `CalculatorApi` trait.

use std::sync::Arc;

use calculator_sdk::{Calculation, CalculatorApi, CalculatorError, Operation};

use crate::domain::Service;

/// Local client for the calculator module.
///
/// This client implements the `CalculatorApi` trait and delegates
/// to the domain service, translating domain errors into SDK errors.
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    /// Creates a new local client with the given service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl CalculatorApi for CalculatorLocalClient {
    fn add(&self, a: f64, b: f64) -> f64 {
        self.service.add(a, b)
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        self.service.subtract(a, b)
    }

    fn multiply(&self, a: f64, b: f64) -> f64 {
        self.service.multiply(a, b)
    }

    fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        self.service.divide(a, b).map_err(CalculatorError::from)
    }

    fn calculate(&self, op: Operation, a: f64, b: f64) -> Result<Calculation, CalculatorError> {
        let result = self.service.evaluate(op, a, b)?;
        Ok(Calculation::new(op, a, b, result))
    }
}
