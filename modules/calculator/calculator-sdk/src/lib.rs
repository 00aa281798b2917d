//! Calculator SDK
//!
//! This crate provides the public API for the `calculator` module:
//! - `CalculatorApi` trait for in-process consumers
//! - `Operation` and `Calculation` models
//! - `CalculatorError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorApi, Operation};
//!
//! let client: Arc<dyn CalculatorApi> = calculator::local_client();
//!
//! let sum = client.add(2.0, 3.0);
//! let quotient = client.divide(8.0, 2.0)?;
//! let calc = client.calculate(Operation::Multiply, 8.0, 2.0)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root for convenience
pub use api::CalculatorApi;
pub use error::CalculatorError;
pub use models::{Calculation, Operation};
