//! Calculator Module Implementation
//!
//! The public API is defined in `calculator-sdk` and re-exported here.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic logic
//! - `domain/error.rs` - Domain errors and their mapping to SDK errors
//! - `local_client.rs` - In-process `CalculatorApi` implementation

use std::sync::Arc;

pub use calculator_sdk::{Calculation, CalculatorApi, CalculatorError, Operation};

pub mod local_client;
pub use local_client::CalculatorLocalClient;

#[doc(hidden)]
pub mod domain;

/// Builds a shareable client backed by a fresh domain service.
#[must_use]
pub fn local_client() -> Arc<dyn CalculatorApi> {
    Arc::new(CalculatorLocalClient::new(Arc::new(domain::Service::new())))
}
