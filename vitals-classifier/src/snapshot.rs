//! Health-data snapshots and per-biomarker reports
//!
//! A snapshot is the JSON body returned by the health-data API's latest
//! reading endpoint. Fields that are absent stay absent in the report; the
//! classifier is only invoked for values that exist.

use crate::biomarker::BiomarkerId;
use crate::classifier::{ClassificationResult, Classifier};
use crate::measurement::{waist_height_ratio, Sex};
use crate::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub waist_circumference: Option<f64>,
    #[serde(default)]
    pub blood_pressure_systolic: Option<f64>,
    #[serde(default)]
    pub blood_pressure_diastolic: Option<f64>,
    #[serde(default)]
    pub fasting_blood_glucose: Option<f64>,
    #[serde(default)]
    pub hdl_cholesterol: Option<f64>,
    #[serde(default)]
    pub triglycerides: Option<f64>,
    #[serde(default, rename = "vitaminD2")]
    pub vitamin_d2: Option<f64>,
    #[serde(default, rename = "vitaminD3")]
    pub vitamin_d3: Option<f64>,
    #[serde(default)]
    pub last_update: Option<String>,
}

impl HealthSnapshot {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Raw value for a biomarker
    ///
    /// `waistHeightRatio` is derived from waist and height when both are
    /// present and usable.
    pub fn value(&self, id: BiomarkerId) -> Result<Option<f64>> {
        let value = match id {
            BiomarkerId::Height => self.height,
            BiomarkerId::Weight => self.weight,
            BiomarkerId::WaistCircumference => self.waist_circumference,
            BiomarkerId::WaistHeightRatio => match (self.waist_circumference, self.height) {
                (Some(waist), Some(height)) => Some(waist_height_ratio(waist, height)?),
                _ => None,
            },
            BiomarkerId::BloodPressureSystolic => self.blood_pressure_systolic,
            BiomarkerId::BloodPressureDiastolic => self.blood_pressure_diastolic,
            BiomarkerId::FastingBloodGlucose => self.fasting_blood_glucose,
            BiomarkerId::HdlCholesterol => self.hdl_cholesterol,
            BiomarkerId::Triglycerides => self.triglycerides,
            BiomarkerId::VitaminD2 => self.vitamin_d2,
            BiomarkerId::VitaminD3 => self.vitamin_d3,
        };
        Ok(value)
    }

    /// Parse `lastUpdate` as RFC 3339 or a bare `YYYY-MM-DD` date (midnight UTC)
    ///
    /// Returns `None` when absent or in any other format.
    pub fn last_update_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.last_update.as_deref()?.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

/// One classified biomarker in a report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub biomarker: BiomarkerId,
    pub label: &'static str,
    pub unit: &'static str,
    pub value: f64,
    pub result: ClassificationResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotReport {
    pub rows: Vec<ReportRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
}

impl SnapshotReport {
    pub fn row(&self, id: BiomarkerId) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.biomarker == id)
    }

    pub fn in_range_count(&self) -> usize {
        self.rows.iter().filter(|r| r.result.in_range).count()
    }

    pub fn out_of_range(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|r| !r.result.in_range)
    }
}

impl Classifier {
    /// Classify every biomarker present in a snapshot, in definition order
    ///
    /// `sex` comes from the caller's own profile/session source. An HDL value
    /// without it fails the whole report with `MissingRequiredContext`.
    pub fn classify_snapshot(
        &self,
        snapshot: &HealthSnapshot,
        sex: Option<Sex>,
    ) -> Result<SnapshotReport> {
        let mut rows = Vec::new();
        for &id in BiomarkerId::all_variants() {
            let Some(value) = snapshot.value(id)? else {
                continue;
            };
            let def = id.definition();
            let result = self.classify_id(id, value, sex)?;
            rows.push(ReportRow {
                biomarker: id,
                label: def.label,
                unit: def.unit,
                value,
                result,
            });
        }
        debug!("Classified {} biomarkers from snapshot", rows.len());

        Ok(SnapshotReport {
            rows,
            last_update: snapshot.last_update_at(),
        })
    }
}
