//! Rendering of calculation results for stdout.

use anyhow::{Context, Result, bail};
use calculator::Calculation;

use crate::config::{OutputConfig, OutputFormat};

/// Renders `calc` according to the output settings.
///
/// # Errors
///
/// Returns an error in JSON mode when any value is NaN or infinite, since
/// JSON numbers cannot carry them, or if serialization fails.
pub fn render(calc: &Calculation, cfg: &OutputConfig) -> Result<String> {
    match cfg.format {
        OutputFormat::Json => {
            if ![calc.a, calc.b, calc.result].iter().all(|v| v.is_finite()) {
                bail!("cannot render non-finite value as JSON: {calc}");
            }
            serde_json::to_string(calc).context("failed to serialize result")
        }
        OutputFormat::Text => Ok(match cfg.precision.map(usize::from) {
            Some(p) => format!(
                "{:.p$} {} {:.p$} = {:.p$}",
                calc.a,
                calc.operation.symbol(),
                calc.b,
                calc.result
            ),
            None => calc.to_string(),
        }),
    }
}
