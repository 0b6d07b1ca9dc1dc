//! Static biomarker definitions
//!
//! One definition per supported biomarker. Identifiers match the field names
//! used by the health-data API (`bloodPressureSystolic`, `hdlCholesterol`, ...).

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Supported biomarkers
///
/// Declaration order is the display order used by snapshot reports and must
/// match the order of the definition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BiomarkerId {
    Height,
    Weight,
    WaistCircumference,
    WaistHeightRatio,
    BloodPressureSystolic,
    BloodPressureDiastolic,
    FastingBloodGlucose,
    HdlCholesterol,
    Triglycerides,
    #[serde(rename = "vitaminD2")]
    VitaminD2,
    #[serde(rename = "vitaminD3")]
    VitaminD3,
}

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthyRange {
    pub min: f64,
    pub max: f64,
}

impl HealthyRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Immutable description of one biomarker
#[derive(Debug, Clone, PartialEq)]
pub struct BiomarkerDefinition {
    pub id: BiomarkerId,
    pub label: &'static str,
    /// Display unit, empty for ratios
    pub unit: &'static str,
    /// Fallback range, used only when no threshold table entry matches
    ///
    /// For table-backed biomarkers this is not the range to display next to
    /// a classification: the table decides `in_range` (HDL 55 for a male is
    /// in range although it lies below this range's minimum of 60).
    pub healthy_range: HealthyRange,
    /// True only for HDL cholesterol
    pub sex_dependent: bool,
    /// Plausible data-entry range enforced on user input, if any
    pub input_bounds: Option<HealthyRange>,
}

static DEFINITIONS: [BiomarkerDefinition; 11] = [
    BiomarkerDefinition {
        id: BiomarkerId::Height,
        label: "Height",
        unit: "cm",
        healthy_range: HealthyRange::new(150.0, 200.0),
        sex_dependent: false,
        input_bounds: Some(HealthyRange::new(50.0, 300.0)),
    },
    BiomarkerDefinition {
        id: BiomarkerId::Weight,
        label: "Weight",
        unit: "kg",
        healthy_range: HealthyRange::new(45.0, 100.0),
        sex_dependent: false,
        input_bounds: Some(HealthyRange::new(20.0, 500.0)),
    },
    BiomarkerDefinition {
        id: BiomarkerId::WaistCircumference,
        label: "Waist Circumference",
        unit: "cm",
        healthy_range: HealthyRange::new(20.0, 94.0),
        sex_dependent: false,
        input_bounds: Some(HealthyRange::new(20.0, 200.0)),
    },
    BiomarkerDefinition {
        id: BiomarkerId::WaistHeightRatio,
        label: "Waist-to-Height Ratio",
        unit: "",
        healthy_range: HealthyRange::new(0.4, 0.5),
        sex_dependent: false,
        input_bounds: None,
    },
    BiomarkerDefinition {
        id: BiomarkerId::BloodPressureSystolic,
        label: "Blood Pressure (Systolic)",
        unit: "mmHg",
        healthy_range: HealthyRange::new(90.0, 120.0),
        sex_dependent: false,
        input_bounds: Some(HealthyRange::new(70.0, 250.0)),
    },
    BiomarkerDefinition {
        id: BiomarkerId::BloodPressureDiastolic,
        label: "Blood Pressure (Diastolic)",
        unit: "mmHg",
        healthy_range: HealthyRange::new(60.0, 80.0),
        sex_dependent: false,
        input_bounds: Some(HealthyRange::new(40.0, 150.0)),
    },
    BiomarkerDefinition {
        id: BiomarkerId::FastingBloodGlucose,
        label: "Fasting Blood Glucose",
        unit: "mg/dL",
        healthy_range: HealthyRange::new(0.0, 85.0),
        sex_dependent: false,
        input_bounds: Some(HealthyRange::new(50.0, 500.0)),
    },
    BiomarkerDefinition {
        id: BiomarkerId::HdlCholesterol,
        label: "HDL Cholesterol",
        unit: "mg/dL",
        healthy_range: HealthyRange::new(60.0, 100.0),
        sex_dependent: true,
        input_bounds: Some(HealthyRange::new(20.0, 100.0)),
    },
    BiomarkerDefinition {
        id: BiomarkerId::Triglycerides,
        label: "Triglycerides",
        unit: "mg/dL",
        healthy_range: HealthyRange::new(0.0, 80.0),
        sex_dependent: false,
        input_bounds: Some(HealthyRange::new(50.0, 1000.0)),
    },
    BiomarkerDefinition {
        id: BiomarkerId::VitaminD2,
        label: "25-Hydroxyvitamin D2",
        unit: "ng/mL",
        healthy_range: HealthyRange::new(20.0, 50.0),
        sex_dependent: false,
        input_bounds: Some(HealthyRange::new(0.0, 200.0)),
    },
    BiomarkerDefinition {
        id: BiomarkerId::VitaminD3,
        label: "25-Hydroxyvitamin D3",
        unit: "ng/mL",
        healthy_range: HealthyRange::new(20.0, 50.0),
        sex_dependent: false,
        input_bounds: Some(HealthyRange::new(0.0, 200.0)),
    },
];

impl BiomarkerId {
    /// Parse the API field name
    ///
    /// Unknown names fail with [`Error::UnknownBiomarker`]; there is no
    /// default biomarker.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "height" => Ok(BiomarkerId::Height),
            "weight" => Ok(BiomarkerId::Weight),
            "waistCircumference" => Ok(BiomarkerId::WaistCircumference),
            "waistHeightRatio" => Ok(BiomarkerId::WaistHeightRatio),
            "bloodPressureSystolic" => Ok(BiomarkerId::BloodPressureSystolic),
            "bloodPressureDiastolic" => Ok(BiomarkerId::BloodPressureDiastolic),
            "fastingBloodGlucose" => Ok(BiomarkerId::FastingBloodGlucose),
            "hdlCholesterol" => Ok(BiomarkerId::HdlCholesterol),
            "triglycerides" => Ok(BiomarkerId::Triglycerides),
            "vitaminD2" => Ok(BiomarkerId::VitaminD2),
            "vitaminD3" => Ok(BiomarkerId::VitaminD3),
            other => Err(Error::UnknownBiomarker(other.to_string())),
        }
    }

    /// API field name
    pub fn as_str(&self) -> &'static str {
        match self {
            BiomarkerId::Height => "height",
            BiomarkerId::Weight => "weight",
            BiomarkerId::WaistCircumference => "waistCircumference",
            BiomarkerId::WaistHeightRatio => "waistHeightRatio",
            BiomarkerId::BloodPressureSystolic => "bloodPressureSystolic",
            BiomarkerId::BloodPressureDiastolic => "bloodPressureDiastolic",
            BiomarkerId::FastingBloodGlucose => "fastingBloodGlucose",
            BiomarkerId::HdlCholesterol => "hdlCholesterol",
            BiomarkerId::Triglycerides => "triglycerides",
            BiomarkerId::VitaminD2 => "vitaminD2",
            BiomarkerId::VitaminD3 => "vitaminD3",
        }
    }

    pub fn definition(&self) -> &'static BiomarkerDefinition {
        &DEFINITIONS[*self as usize]
    }

    pub fn all_variants() -> &'static [BiomarkerId] {
        &[
            BiomarkerId::Height,
            BiomarkerId::Weight,
            BiomarkerId::WaistCircumference,
            BiomarkerId::WaistHeightRatio,
            BiomarkerId::BloodPressureSystolic,
            BiomarkerId::BloodPressureDiastolic,
            BiomarkerId::FastingBloodGlucose,
            BiomarkerId::HdlCholesterol,
            BiomarkerId::Triglycerides,
            BiomarkerId::VitaminD2,
            BiomarkerId::VitaminD3,
        ]
    }
}

impl std::fmt::Display for BiomarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// All biomarker definitions in display order
pub fn definitions() -> &'static [BiomarkerDefinition] {
    &DEFINITIONS
}
