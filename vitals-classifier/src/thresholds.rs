//! Per-biomarker threshold tables
//!
//! Every table is evaluated in ascending order and the first matching entry
//! wins. Tables are exhaustive: the first entry is open below, the last is
//! open above, and each closed interval starts where the previous one ends.
//! A value exactly on a shared edge therefore belongs to the lower bucket
//! (systolic 120 is "Normal", not "Elevated").
//!
//! `score` is the implied 0-100 sub-score of a bucket. Whether a bucket
//! counts as in range is decided from it by the classifier's cutoff.

use crate::biomarker::BiomarkerId;
use crate::color::ColorToken;
use crate::measurement::Sex;
use crate::{Error, Result};

/// Numeric condition of a threshold entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// `value < x`
    Below(f64),
    /// `low <= value <= high`
    Between(f64, f64),
    /// `value > x`
    Above(f64),
}

impl Bound {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Bound::Below(x) => value < x,
            Bound::Between(low, high) => low <= value && value <= high,
            Bound::Above(x) => value > x,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdEntry {
    pub bound: Bound,
    pub category: &'static str,
    pub color: ColorToken,
    pub score: u8,
}

const fn entry(bound: Bound, category: &'static str, color: ColorToken, score: u8) -> ThresholdEntry {
    ThresholdEntry {
        bound,
        category,
        color,
        score,
    }
}

/// Ordered bucket list for one biomarker (or one sex variant of it)
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    pub biomarker: BiomarkerId,
    /// `Some` only for the sex-specific HDL tables
    pub variant: Option<Sex>,
    pub entries: &'static [ThresholdEntry],
}

impl ThresholdTable {
    /// First entry matching `value`, in ascending order
    pub fn lookup(&self, value: f64) -> Option<&ThresholdEntry> {
        self.entries.iter().find(|e| e.bound.matches(value))
    }

    /// Check ordering and coverage of the table
    ///
    /// Requires `Below` first, `Above` last, `Between` in between, and every
    /// edge equal to the previous entry's upper edge.
    pub fn validate(&self) -> Result<()> {
        let name = self.biomarker.as_str();
        let invalid = |msg: String| Error::Config(format!("{} threshold table: {}", name, msg));
        let (first, rest) = self
            .entries
            .split_first()
            .ok_or_else(|| invalid("empty table".to_string()))?;
        let mut edge = match first.bound {
            Bound::Below(x) => x,
            other => return Err(invalid(format!("first entry must be open below, got {:?}", other))),
        };
        if rest.is_empty() {
            return Err(invalid("no upper entries".to_string()));
        }

        for (i, e) in rest.iter().enumerate() {
            let is_last = i + 1 == rest.len();
            match e.bound {
                Bound::Between(low, high) if !is_last => {
                    if low != edge {
                        return Err(invalid(format!("gap or overlap at {} (expected {})", low, edge)));
                    }
                    if high <= low {
                        return Err(invalid(format!("empty interval [{}, {}]", low, high)));
                    }
                    edge = high;
                }
                Bound::Above(x) if is_last => {
                    if x != edge {
                        return Err(invalid(format!("open upper bound {} does not meet {}", x, edge)));
                    }
                }
                other => {
                    return Err(invalid(format!("unexpected {:?} at position {}", other, i + 1)));
                }
            }
        }
        Ok(())
    }
}

static WAIST_HEIGHT_RATIO: ThresholdTable = ThresholdTable {
    biomarker: BiomarkerId::WaistHeightRatio,
    variant: None,
    entries: &[
        entry(Bound::Below(0.4), "Underweight Risk", ColorToken::Blue, 60),
        entry(Bound::Between(0.4, 0.5), "Healthy", ColorToken::Green, 100),
        entry(Bound::Between(0.5, 0.6), "Increased Risk", ColorToken::Orange, 50),
        entry(Bound::Above(0.6), "High Risk", ColorToken::Red, 20),
    ],
};

static BLOOD_PRESSURE_SYSTOLIC: ThresholdTable = ThresholdTable {
    biomarker: BiomarkerId::BloodPressureSystolic,
    variant: None,
    entries: &[
        entry(Bound::Below(90.0), "Low", ColorToken::Blue, 70),
        entry(Bound::Between(90.0, 120.0), "Normal", ColorToken::Green, 100),
        entry(Bound::Between(120.0, 130.0), "Elevated", ColorToken::Yellow, 75),
        entry(Bound::Between(130.0, 140.0), "Hypertension Stage 1", ColorToken::Orange, 50),
        entry(Bound::Between(140.0, 160.0), "Hypertension Stage 2", ColorToken::Red, 25),
        entry(Bound::Above(160.0), "Hypertensive Crisis", ColorToken::DarkRed, 0),
    ],
};

static BLOOD_PRESSURE_DIASTOLIC: ThresholdTable = ThresholdTable {
    biomarker: BiomarkerId::BloodPressureDiastolic,
    variant: None,
    entries: &[
        entry(Bound::Below(60.0), "Low", ColorToken::Blue, 70),
        entry(Bound::Between(60.0, 80.0), "Normal", ColorToken::Green, 100),
        entry(Bound::Between(80.0, 90.0), "Hypertension Stage 1", ColorToken::Orange, 50),
        entry(Bound::Between(90.0, 120.0), "Hypertension Stage 2", ColorToken::Red, 25),
        entry(Bound::Above(120.0), "Hypertensive Crisis", ColorToken::DarkRed, 0),
    ],
};

static FASTING_BLOOD_GLUCOSE: ThresholdTable = ThresholdTable {
    biomarker: BiomarkerId::FastingBloodGlucose,
    variant: None,
    entries: &[
        entry(Bound::Below(70.0), "Hypoglycemia", ColorToken::Purple, 40),
        entry(Bound::Between(70.0, 85.0), "Optimal", ColorToken::Green, 100),
        entry(Bound::Between(85.0, 100.0), "Normal", ColorToken::LightGreen, 85),
        entry(Bound::Between(100.0, 126.0), "Prediabetes", ColorToken::Yellow, 55),
        entry(Bound::Between(126.0, 200.0), "Diabetes", ColorToken::Red, 20),
        entry(Bound::Above(200.0), "Severe Hyperglycemia", ColorToken::DarkRed, 0),
    ],
};

static HDL_CHOLESTEROL_MALE: ThresholdTable = ThresholdTable {
    biomarker: BiomarkerId::HdlCholesterol,
    variant: Some(Sex::Male),
    entries: &[
        entry(Bound::Below(40.0), "Low", ColorToken::Red, 20),
        entry(Bound::Between(40.0, 50.0), "Borderline", ColorToken::Yellow, 60),
        entry(Bound::Between(50.0, 60.0), "Near Optimal", ColorToken::LightGreen, 80),
        entry(Bound::Above(60.0), "Optimal", ColorToken::Green, 100),
    ],
};

static HDL_CHOLESTEROL_FEMALE: ThresholdTable = ThresholdTable {
    biomarker: BiomarkerId::HdlCholesterol,
    variant: Some(Sex::Female),
    entries: &[
        entry(Bound::Below(50.0), "Low", ColorToken::Red, 20),
        entry(Bound::Between(50.0, 60.0), "Borderline", ColorToken::Yellow, 60),
        entry(Bound::Between(60.0, 70.0), "Near Optimal", ColorToken::LightGreen, 80),
        entry(Bound::Above(70.0), "Optimal", ColorToken::Green, 100),
    ],
};

static TRIGLYCERIDES: ThresholdTable = ThresholdTable {
    biomarker: BiomarkerId::Triglycerides,
    variant: None,
    entries: &[
        entry(Bound::Below(100.0), "Optimal", ColorToken::Green, 100),
        entry(Bound::Between(100.0, 150.0), "Normal", ColorToken::LightGreen, 85),
        entry(Bound::Between(150.0, 200.0), "Borderline High", ColorToken::Yellow, 60),
        entry(Bound::Between(200.0, 500.0), "High", ColorToken::Red, 25),
        entry(Bound::Above(500.0), "Very High", ColorToken::DarkRed, 0),
    ],
};

/// Every shipped table, including both HDL variants
pub fn all_tables() -> [&'static ThresholdTable; 7] {
    [
        &WAIST_HEIGHT_RATIO,
        &BLOOD_PRESSURE_SYSTOLIC,
        &BLOOD_PRESSURE_DIASTOLIC,
        &FASTING_BLOOD_GLUCOSE,
        &HDL_CHOLESTEROL_MALE,
        &HDL_CHOLESTEROL_FEMALE,
        &TRIGLYCERIDES,
    ]
}

/// Select the table for a biomarker
///
/// `Ok(None)` means the biomarker is classified by its healthy range only.
/// HDL needs a sex. `Sex::Other` selects the female table here; the
/// classifier remaps it first when configured otherwise
/// (see [`crate::config::OtherSexTable`]).
pub fn table_for(id: BiomarkerId, sex: Option<Sex>) -> Result<Option<&'static ThresholdTable>> {
    let table = match id {
        BiomarkerId::WaistHeightRatio => &WAIST_HEIGHT_RATIO,
        BiomarkerId::BloodPressureSystolic => &BLOOD_PRESSURE_SYSTOLIC,
        BiomarkerId::BloodPressureDiastolic => &BLOOD_PRESSURE_DIASTOLIC,
        BiomarkerId::FastingBloodGlucose => &FASTING_BLOOD_GLUCOSE,
        BiomarkerId::Triglycerides => &TRIGLYCERIDES,
        BiomarkerId::HdlCholesterol => match sex {
            Some(Sex::Male) => &HDL_CHOLESTEROL_MALE,
            Some(Sex::Female) | Some(Sex::Other) => &HDL_CHOLESTEROL_FEMALE,
            None => {
                return Err(Error::MissingRequiredContext {
                    biomarker: id.as_str(),
                    context: "sex",
                })
            }
        },
        BiomarkerId::Height
        | BiomarkerId::Weight
        | BiomarkerId::WaistCircumference
        | BiomarkerId::VitaminD2
        | BiomarkerId::VitaminD3 => return Ok(None),
    };
    Ok(Some(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_valid() {
        for table in all_tables() {
            if let Err(e) = table.validate() {
                panic!("{:?} table invalid: {}", table.variant, e);
            }
        }
    }

    #[test]
    fn test_scores_within_percent_range() {
        for table in all_tables() {
            for e in table.entries {
                assert!(e.score <= 100, "{}: {}", table.biomarker, e.category);
            }
        }
    }

    #[test]
    fn test_bound_matches() {
        assert!(Bound::Below(90.0).matches(89.99));
        assert!(!Bound::Below(90.0).matches(90.0));
        assert!(Bound::Between(90.0, 120.0).matches(90.0));
        assert!(Bound::Between(90.0, 120.0).matches(120.0));
        assert!(!Bound::Between(90.0, 120.0).matches(120.01));
        assert!(Bound::Above(160.0).matches(160.5));
        assert!(!Bound::Above(160.0).matches(160.0));
    }

    #[test]
    fn test_shared_edge_goes_to_lower_bucket() {
        let table = table_for(BiomarkerId::BloodPressureSystolic, None).unwrap().unwrap();
        assert_eq!(table.lookup(120.0).unwrap().category, "Normal");
        assert_eq!(table.lookup(120.5).unwrap().category, "Elevated");
        assert_eq!(table.lookup(160.0).unwrap().category, "Hypertension Stage 2");
    }

    #[test]
    fn test_hdl_requires_sex() {
        let err = table_for(BiomarkerId::HdlCholesterol, None).unwrap_err();
        assert!(matches!(err, Error::MissingRequiredContext { context: "sex", .. }));
    }

    #[test]
    fn test_hdl_variant_selection() {
        let male = table_for(BiomarkerId::HdlCholesterol, Some(Sex::Male)).unwrap().unwrap();
        let female = table_for(BiomarkerId::HdlCholesterol, Some(Sex::Female)).unwrap().unwrap();
        assert_eq!(male.variant, Some(Sex::Male));
        assert_eq!(female.variant, Some(Sex::Female));
    }

    #[test]
    fn test_range_only_biomarkers_have_no_table() {
        for id in [BiomarkerId::Height, BiomarkerId::Weight, BiomarkerId::VitaminD3] {
            assert!(table_for(id, None).unwrap().is_none());
        }
    }

    #[test]
    fn test_validate_rejects_gap() {
        static GAPPED: ThresholdTable = ThresholdTable {
            biomarker: BiomarkerId::Triglycerides,
            variant: None,
            entries: &[
                entry(Bound::Below(100.0), "A", ColorToken::Green, 100),
                entry(Bound::Between(110.0, 150.0), "B", ColorToken::Yellow, 60),
                entry(Bound::Above(150.0), "C", ColorToken::Red, 0),
            ],
        };
        let err = GAPPED.validate().unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("gap or overlap")));
    }

    #[test]
    fn test_validate_rejects_missing_open_end() {
        static CLOSED: ThresholdTable = ThresholdTable {
            biomarker: BiomarkerId::Triglycerides,
            variant: None,
            entries: &[
                entry(Bound::Below(100.0), "A", ColorToken::Green, 100),
                entry(Bound::Between(100.0, 150.0), "B", ColorToken::Yellow, 60),
            ],
        };
        let err = CLOSED.validate().unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("triglycerides threshold table")));
    }
}
