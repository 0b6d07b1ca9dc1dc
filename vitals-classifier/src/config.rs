//! Classifier configuration
//!
//! Loaded from TOML. Every field has a built-in default, so an empty file (or
//! no file at all) yields [`ClassifierConfig::default`]. The library reads no
//! environment variables; the embedding application decides where the file
//! lives.
//!
//! ```toml
//! in_range_cutoff = 80
//! other_sex_table = "female"
//!
//! [logging]
//! level = "debug"
//! ```

use crate::measurement::Sex;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Cutoff used when none is configured: a bucket with an implied score of
/// 80 or more is in range.
pub const DEFAULT_IN_RANGE_CUTOFF: u8 = 80;

/// HDL table applied to subjects whose sex is recorded as `other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OtherSexTable {
    /// Higher HDL thresholds; the stricter of the two tables
    #[default]
    Female,
    Male,
}

impl OtherSexTable {
    pub fn as_sex(&self) -> Sex {
        match self {
            OtherSexTable::Female => Sex::Female,
            OtherSexTable::Male => Sex::Male,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassifierConfig {
    /// Minimum implied bucket score counted as in range (1-100)
    #[serde(default = "default_in_range_cutoff")]
    pub in_range_cutoff: u8,

    #[serde(default)]
    pub other_sex_table: OtherSexTable,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_in_range_cutoff() -> u8 {
    DEFAULT_IN_RANGE_CUTOFF
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            in_range_cutoff: DEFAULT_IN_RANGE_CUTOFF,
            other_sex_table: OtherSexTable::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ClassifierConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ClassifierConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid classifier config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// A missing or unreadable file is an I/O error; the caller chooses
    /// whether to fall back to [`ClassifierConfig::default`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(
            "Loaded classifier config from {} (in_range_cutoff={}, other_sex_table={:?})",
            path.display(),
            config.in_range_cutoff,
            config.other_sex_table
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.in_range_cutoff) {
            return Err(Error::Config(format!(
                "in_range_cutoff: value {} out of range [1, 100]",
                self.in_range_cutoff
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(Error::Config("logging.level must not be empty".to_string()));
        }
        Ok(())
    }
}
