//! Configuration parsing and validation.
//!
//! Configuration is loaded from TOML files with CLI overrides. Every field
//! has a default, so an empty file is a valid configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Annotation side-effect settings.
    #[serde(default)]
    pub annotation: AnnotationConfig,

    /// Logging configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Settings for the unfriendly-statement counter and throttled logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationConfig {
    /// Name of the counter incremented for every replication-unfriendly DML.
    #[serde(default = "default_unfriendly_counter")]
    pub unfriendly_counter: String,

    /// Name the throttled logger prefixes its messages with.
    #[serde(default = "default_throttled_logger")]
    pub throttled_logger: String,

    /// Minimum interval between two warnings, in milliseconds.
    #[serde(default = "default_log_interval_ms")]
    pub log_interval_ms: u64,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            unfriendly_counter: default_unfriendly_counter(),
            throttled_logger: default_throttled_logger(),
            log_interval_ms: default_log_interval_ms(),
        }
    }
}

impl AnnotationConfig {
    /// The throttle window as a duration.
    pub fn log_interval(&self) -> Duration {
        Duration::from_millis(self.log_interval_ms)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub json_output: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_output: false,
        }
    }
}

// Default value functions

fn default_unfriendly_counter() -> String {
    crate::ops::observability::metrics::FILTERED_REPLICATION_UNFRIENDLY_STATEMENTS.to_string()
}

fn default_throttled_logger() -> String {
    "FilteredReplicationUnfriendlyStatement".to_string()
}

fn default_log_interval_ms() -> u64 {
    5_000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| "failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).with_context(|| "failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config")
    }

    /// Apply CLI overrides to the configuration.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(ref log_level) = overrides.log_level {
            self.telemetry.log_level = log_level.clone();
        }
        if let Some(json_output) = overrides.json_output {
            self.telemetry.json_output = json_output;
        }
        if let Some(log_interval_ms) = overrides.log_interval_ms {
            self.annotation.log_interval_ms = log_interval_ms;
        }
    }

    /// Validate configuration consistency.
    pub fn validate(&self) -> Result<()> {
        self.validate_annotation()?;
        self.validate_telemetry()?;
        Ok(())
    }

    fn validate_annotation(&self) -> Result<()> {
        if self.annotation.unfriendly_counter.trim().is_empty() {
            anyhow::bail!("annotation.unfriendly_counter must not be empty");
        }
        if self.annotation.throttled_logger.trim().is_empty() {
            anyhow::bail!("annotation.throttled_logger must not be empty");
        }
        if self.annotation.log_interval_ms == 0 {
            anyhow::bail!("annotation.log_interval_ms must be > 0");
        }
        Ok(())
    }

    fn validate_telemetry(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "telemetry.log_level must be one of {:?}, got: {}",
                valid_levels,
                self.telemetry.log_level
            );
        }
        Ok(())
    }
}

/// CLI override options that can be applied to configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override log level.
    pub log_level: Option<String>,
    /// Override JSON log output.
    pub json_output: Option<bool>,
    /// Override the throttle window.
    pub log_interval_ms: Option<u64>,
}
