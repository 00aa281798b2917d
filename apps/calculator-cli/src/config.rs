//! Layered configuration for the `calc` binary.
//!
//! Precedence, lowest first: compiled defaults, YAML file (`--config`),
//! `CALC__*` environment variables, then CLI flags.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

/// Prefix for environment overrides, e.g. `CALC__OUTPUT__FORMAT=json`.
pub const ENV_PREFIX: &str = "CALC__";

/// Rendering used for log lines on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level used when neither `RUST_LOG` nor `-v` is given.
    pub console_level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: "warn".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Rendering used for results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Fixed number of decimals for text output; shortest repr when unset.
    /// Bounded by `u16` because format precision cannot exceed `u16::MAX`.
    pub precision: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Loads defaults, then the optional YAML file, then `CALC__*` env vars.
    ///
    /// # Errors
    ///
    /// Fails if `path` is given but is not a file, or if any layer holds
    /// malformed YAML, unknown keys, values of the wrong type, or a
    /// `logging.console_level` that is not a level name.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to load configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but are still meaningless.
    ///
    /// # Errors
    ///
    /// Fails if `logging.console_level` is not one of
    /// `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub fn validate(&self) -> Result<()> {
        let level = &self.logging.console_level;
        if LevelFilter::from_str(level).is_err() {
            bail!("invalid logging.console_level: {level:?}");
        }
        Ok(())
    }

    /// Applies flags that take precedence over every other layer.
    pub fn apply_cli_overrides(&mut self, json: bool) {
        if json {
            self.output.format = OutputFormat::Json;
        }
    }

    /// Pretty-printed JSON of the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}
