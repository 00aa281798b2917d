#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for calculator integration tests

use std::sync::Arc;

use calculator::{CalculatorApi, CalculatorLocalClient, domain::Service};

/// Finite operands spanning signs, zeros, fractions and large magnitudes.
pub const SAMPLES: &[f64] = &[
    0.0,
    -0.0,
    1.0,
    -1.0,
    0.1,
    -0.3,
    2.5,
    3.0,
    -8.0,
    1e-6,
    123_456.789,
    -987_654.321,
    1e9,
    -2e9,
];

pub fn create_client() -> Arc<dyn CalculatorApi> {
    Arc::new(CalculatorLocalClient::new(Arc::new(Service::new())))
}

/// Relative comparison with an absolute floor near zero.
pub fn approx_eq(actual: f64, expected: f64) -> bool {
    let scale = expected.abs().max(1.0);
    (actual - expected).abs() <= 1e-12 * scale
}
