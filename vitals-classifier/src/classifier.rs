//! Biomarker classification
//!
//! Maps a measured value (or a pre-computed 0-100 sub-score) to a category
//! label, a color token and an in-range flag. Pure and deterministic: no I/O,
//! no shared mutable state, safe to call from any thread.
//!
//! Check order for `classify`:
//! 1. Unknown biomarker id → [`Error::UnknownBiomarker`]
//! 2. Non-finite value → [`Error::InvalidValue`]
//! 3. HDL without sex → [`Error::MissingRequiredContext`]

use crate::biomarker::BiomarkerId;
use crate::color::ColorToken;
use crate::config::ClassifierConfig;
use crate::measurement::{Measurement, Sex};
use crate::thresholds::{table_for, ThresholdEntry};
use crate::{Error, Result};
use serde::Serialize;
use tracing::{debug, trace};

/// Outcome of one classification
///
/// Recomputed on every call, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub in_range: bool,
    pub category: String,
    pub color: ColorToken,
    /// Implied bucket score; `None` when the healthy-range fallback was used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

/// Sub-score bands for pre-computed 0-100 scores, highest first
const SUB_SCORE_BANDS: [(u8, &str, ColorToken); 5] = [
    (90, "Excellent", ColorToken::Green),
    (80, "Good", ColorToken::LightGreen),
    (60, "Fair", ColorToken::Yellow),
    (40, "Poor", ColorToken::Orange),
    (0, "Critical", ColorToken::Red),
];

/// Classifier bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Build a classifier, validating the configuration
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify `value` for the biomarker named `biomarker_id`
    ///
    /// `value` is in the biomarker's natural unit. For `waistHeightRatio`
    /// pass the already-divided ratio (see
    /// [`crate::measurement::waist_height_ratio`]).
    pub fn classify(
        &self,
        biomarker_id: &str,
        value: f64,
        sex: Option<Sex>,
    ) -> Result<ClassificationResult> {
        let id = BiomarkerId::parse(biomarker_id)?;
        self.classify_id(id, value, sex)
    }

    /// Same as [`Classifier::classify`] for an already-parsed id
    pub fn classify_id(
        &self,
        id: BiomarkerId,
        value: f64,
        sex: Option<Sex>,
    ) -> Result<ClassificationResult> {
        if !value.is_finite() {
            return Err(Error::invalid_value(id.as_str(), value));
        }

        let sex = sex.map(|s| match s {
            Sex::Other => self.config.other_sex_table.as_sex(),
            s => s,
        });

        let result = match table_for(id, sex)? {
            Some(table) => match table.lookup(value) {
                Some(entry) => self.result_for(entry),
                None => self.fallback(id, value),
            },
            None => self.fallback(id, value),
        };

        trace!(
            biomarker = id.as_str(),
            value,
            category = %result.category,
            in_range = result.in_range,
            "classified"
        );
        Ok(result)
    }

    pub fn classify_measurement(&self, measurement: &Measurement) -> Result<ClassificationResult> {
        self.classify(&measurement.biomarker_id, measurement.value, measurement.sex)
    }

    /// Classify a pre-computed 0-100 sub-score
    ///
    /// Bands: 90+ Excellent, 80+ Good, 60+ Fair, 40+ Poor, below 40 Critical.
    /// The score is rounded to a whole number first; band, in-range flag and
    /// reported score all derive from that rounded value. In range uses the
    /// configured cutoff.
    pub fn classify_sub_score(&self, score: f64) -> Result<ClassificationResult> {
        if !score.is_finite() || !(0.0..=100.0).contains(&score) {
            return Err(Error::invalid_value("score", score));
        }
        // Checked to 0-100 above
        let rounded = score.round() as u8;
        let (_, category, color) = SUB_SCORE_BANDS
            .iter()
            .find(|(floor, _, _)| rounded >= *floor)
            .copied()
            .unwrap_or(SUB_SCORE_BANDS[SUB_SCORE_BANDS.len() - 1]);

        Ok(ClassificationResult {
            in_range: rounded >= self.config.in_range_cutoff,
            category: category.to_string(),
            color,
            score: Some(rounded),
        })
    }

    fn result_for(&self, entry: &ThresholdEntry) -> ClassificationResult {
        ClassificationResult {
            in_range: entry.score >= self.config.in_range_cutoff,
            category: entry.category.to_string(),
            color: entry.color,
            score: Some(entry.score),
        }
    }

    fn fallback(&self, id: BiomarkerId, value: f64) -> ClassificationResult {
        let range = id.definition().healthy_range;
        let in_range = range.contains(value);
        debug!(
            "No threshold table entry for {} = {}, using healthy range [{}, {}]",
            id, value, range.min, range.max
        );
        ClassificationResult {
            in_range,
            category: if in_range { "Normal" } else { "Out of Range" }.to_string(),
            color: if in_range { ColorToken::Green } else { ColorToken::Red },
            score: None,
        }
    }
}

/// Classify with the default configuration
pub fn classify(biomarker_id: &str, value: f64, sex: Option<Sex>) -> Result<ClassificationResult> {
    Classifier::default().classify(biomarker_id, value, sex)
}

/// Classify a pre-computed sub-score with the default configuration
pub fn classify_sub_score(score: f64) -> Result<ClassificationResult> {
    Classifier::default().classify_sub_score(score)
}
