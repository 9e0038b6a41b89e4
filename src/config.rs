//! Configuration loading from TOML with environment variable overrides.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Every field has a default, so an empty (or absent) file yields the
//! stock tracker: threshold 1000 and the sample walkthrough amounts.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

use crate::types::FlownetError;

/// Environment variable that overrides `tracker.threshold`.
pub const THRESHOLD_ENV: &str = "FLOWNET_THRESHOLD";

/// Threshold used when none is configured.
pub const DEFAULT_THRESHOLD: Decimal = Decimal::ONE_THOUSAND;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrackerConfig {
    /// Mode activates when a day's total strictly exceeds this.
    #[serde(default = "default_threshold")]
    pub threshold: Decimal,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    /// Amounts recorded for today by the walkthrough binary.
    #[serde(default = "default_sample_winnings")]
    pub sample_winnings: Vec<Decimal>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sample_winnings: default_sample_winnings(),
        }
    }
}

fn default_threshold() -> Decimal {
    DEFAULT_THRESHOLD
}

fn default_sample_winnings() -> Vec<Decimal> {
    vec![dec!(500), dec!(300), dec!(250)]
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist. Environment overrides are applied either way.
    pub fn load_or_default(path: &str) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::load(path)?
        } else {
            info!(path, "No config file found, using defaults");
            Self::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Apply `FLOWNET_THRESHOLD` if it is set.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(raw) = std::env::var(THRESHOLD_ENV) {
            self.tracker.threshold = parse_threshold(&raw)?;
            debug!(threshold = %self.tracker.threshold, "Threshold overridden from environment");
        }
        Ok(())
    }
}

/// Parse a threshold value supplied as text.
pub fn parse_threshold(raw: &str) -> Result<Decimal, FlownetError> {
    Decimal::from_str(raw.trim())
        .map_err(|e| FlownetError::Config(format!("invalid {THRESHOLD_ENV} value {raw:?}: {e}")))
}
