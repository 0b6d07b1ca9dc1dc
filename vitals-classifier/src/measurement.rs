//! Measurement inputs and caller-side derivations
//!
//! Derived values (waist-to-height ratio, BMI) are computed here, explicitly,
//! before classification. The classifier never divides by height itself.

use crate::biomarker::BiomarkerId;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Sex of the subject, as collected during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    /// Parse a profile value (case insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            "other" => Some(Sex::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single value to classify
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub biomarker_id: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
}

impl Measurement {
    pub fn new(biomarker_id: impl Into<String>, value: f64) -> Self {
        Self {
            biomarker_id: biomarker_id.into(),
            value,
            sex: None,
        }
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }
}

fn require_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::invalid_value(field, value))
    }
}

/// Waist circumference divided by height, both in centimeters
///
/// This is the value expected for `waistHeightRatio`.
pub fn waist_height_ratio(waist_cm: f64, height_cm: f64) -> Result<f64> {
    let waist = require_finite("waistCircumference", waist_cm)?;
    let height = require_finite("height", height_cm)?;
    if waist < 0.0 {
        return Err(Error::invalid_value("waistCircumference", waist));
    }
    if height <= 0.0 {
        return Err(Error::invalid_value("height", height));
    }
    Ok(waist / height)
}

/// Body mass index from weight (kg) and height (cm)
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> Result<f64> {
    let weight = require_finite("weight", weight_kg)?;
    let height = require_finite("height", height_cm)?;
    if weight <= 0.0 {
        return Err(Error::invalid_value("weight", weight));
    }
    if height <= 0.0 {
        return Err(Error::invalid_value("height", height));
    }
    let meters = height / 100.0;
    Ok(weight / (meters * meters))
}

/// Check a user-entered value against the biomarker's data-entry bounds
///
/// Biomarkers without input bounds (derived ratios) only require a finite value.
pub fn validate_input(id: BiomarkerId, value: f64) -> Result<()> {
    let value = require_finite(id.as_str(), value)?;
    match id.definition().input_bounds {
        Some(bounds) if !bounds.contains(value) => Err(Error::invalid_value(id.as_str(), value)),
        _ => Ok(()),
    }
}
