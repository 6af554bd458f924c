//! Configuration management for the school fees engine.
//!
//! Configuration is layered with figment: built-in defaults, then an optional
//! TOML file, then environment variables.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{SchoolError, SchoolSettings};

/// Config file read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "school-fees.toml";

/// Prefix for environment overrides, e.g. `SCHOOL_FEES_REPORTS__RECENT_RECEIPTS_LIMIT`.
pub const ENV_PREFIX: &str = "SCHOOL_FEES_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SCHOOL_FEES_`, `__` between sections)
/// 2. TOML config file
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the store's initial records come from.
    pub data: DataConfig,
    /// Report options.
    pub reports: ReportsConfig,
    /// Initial school settings record.
    pub settings: SchoolSettings,
}

/// Startup data configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Populate the store with the demonstration data set.
    pub seed_demo_data: bool,
    /// Student roster CSV imported at startup.
    pub roster_path: Option<PathBuf>,
}

/// Report-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportsConfig {
    /// Rows shown by the recent receipts report when no limit is given.
    pub recent_receipts_limit: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            roster_path: None,
        }
    }
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            recent_receipts_limit: 5,
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// Without a path, `school-fees.toml` in the working directory is used
    /// if it exists.
    ///
    /// # Errors
    ///
    /// Returns [`SchoolError::FileNotFound`] if an explicit path does not
    /// exist, and [`SchoolError::Config`] if loading or validation fails.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, SchoolError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(SchoolError::file_not_found(&path.display().to_string()));
            }
        }

        let config_file = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        Self::extract(Self::figment(&config_file, ENV_PREFIX))
    }

    fn figment(config_file: &Path, env_prefix: &str) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(env_prefix).split("__"))
    }

    fn extract(figment: Figment) -> Result<Self, SchoolError> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are out of range.
    pub fn validate(&self) -> Result<(), SchoolError> {
        if self.reports.recent_receipts_limit == 0 {
            return Err(SchoolError::config(
                "reports.recent_receipts_limit must be greater than 0",
            ));
        }

        if self.settings.receipt_copies == 0 {
            return Err(SchoolError::config(
                "settings.receipt_copies must be at least 1",
            ));
        }

        let tax = self.settings.tax_percentage;
        if tax < Decimal::ZERO || tax > Decimal::ONE_HUNDRED {
            return Err(SchoolError::config(&format!(
                "settings.tax_percentage ({}) must be between 0 and 100",
                tax
            )));
        }

        Ok(())
    }
}
