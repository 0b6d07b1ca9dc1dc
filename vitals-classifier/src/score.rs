//! Status of the aggregate health score
//!
//! The aggregate score itself is computed by the health-score service; this
//! module only labels it for display.

use crate::color::ColorToken;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Scores at or above this are "Excellent"
pub const EXCELLENT_MIN: f64 = 70.0;
/// Scores at or above this (and below [`EXCELLENT_MIN`]) are "Good"
pub const GOOD_MIN: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthScoreStatus {
    Excellent,
    Good,
    #[serde(rename = "Need to improve")]
    NeedsImprovement,
}

impl HealthScoreStatus {
    /// Label an aggregate 0-100 score
    pub fn from_score(score: f64) -> Result<Self> {
        if !score.is_finite() || !(0.0..=100.0).contains(&score) {
            return Err(Error::invalid_value("healthScore", score));
        }
        Ok(if score >= EXCELLENT_MIN {
            HealthScoreStatus::Excellent
        } else if score >= GOOD_MIN {
            HealthScoreStatus::Good
        } else {
            HealthScoreStatus::NeedsImprovement
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthScoreStatus::Excellent => "Excellent",
            HealthScoreStatus::Good => "Good",
            HealthScoreStatus::NeedsImprovement => "Need to improve",
        }
    }

    pub fn color(&self) -> ColorToken {
        match self {
            HealthScoreStatus::Excellent => ColorToken::Green,
            HealthScoreStatus::Good => ColorToken::Orange,
            HealthScoreStatus::NeedsImprovement => ColorToken::Red,
        }
    }
}

impl std::fmt::Display for HealthScoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundaries() {
        assert_eq!(HealthScoreStatus::from_score(100.0).unwrap(), HealthScoreStatus::Excellent);
        assert_eq!(HealthScoreStatus::from_score(70.0).unwrap(), HealthScoreStatus::Excellent);
        assert_eq!(HealthScoreStatus::from_score(69.9).unwrap(), HealthScoreStatus::Good);
        assert_eq!(HealthScoreStatus::from_score(50.0).unwrap(), HealthScoreStatus::Good);
        assert_eq!(
            HealthScoreStatus::from_score(49.0).unwrap(),
            HealthScoreStatus::NeedsImprovement
        );
        assert_eq!(
            HealthScoreStatus::from_score(0.0).unwrap(),
            HealthScoreStatus::NeedsImprovement
        );
    }

    #[test]
    fn test_status_rejects_invalid_scores() {
        assert!(HealthScoreStatus::from_score(-0.1).is_err());
        assert!(HealthScoreStatus::from_score(101.0).is_err());
        assert!(HealthScoreStatus::from_score(f64::NAN).is_err());
    }

    #[test]
    fn test_labels_and_colors() {
        assert_eq!(HealthScoreStatus::Good.to_string(), "Good");
        assert_eq!(HealthScoreStatus::NeedsImprovement.label(), "Need to improve");
        assert_eq!(HealthScoreStatus::Good.color(), ColorToken::Orange);
        assert_eq!(
            serde_json::to_string(&HealthScoreStatus::NeedsImprovement).unwrap(),
            "\"Need to improve\""
        );
    }
}
