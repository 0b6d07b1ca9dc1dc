//! # Vitals Classifier
//!
//! Qualitative classification of biometric measurements for the health
//! dashboard:
//! - Biomarker definitions (labels, units, healthy ranges)
//! - Per-biomarker threshold tables, with sex-specific HDL tables
//! - `classify` returning category, color token and in-range flag
//! - Health-data snapshot reports and aggregate score status
//! - Configuration loading and tracing setup

pub mod biomarker;
pub mod classifier;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod measurement;
pub mod score;
pub mod snapshot;
pub mod thresholds;

pub use biomarker::{BiomarkerDefinition, BiomarkerId, HealthyRange};
pub use classifier::{classify, classify_sub_score, ClassificationResult, Classifier};
pub use color::ColorToken;
pub use config::ClassifierConfig;
pub use error::{Error, Result};
pub use measurement::{Measurement, Sex};
pub use score::HealthScoreStatus;
pub use snapshot::{HealthSnapshot, SnapshotReport};
