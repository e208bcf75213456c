//! Derived ROI metrics

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Wire text of the not-applicable sentinel
pub const NOT_APPLICABLE: &str = "N/A";

/// Working days needed to recover the setup cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoiDays {
    /// Non-negative number of working days (fractional)
    Days(f64),
    /// Savings are zero or negative: the investment never pays back
    NotApplicable,
}

impl RoiDays {
    pub fn days(self) -> Option<f64> {
        match self {
            RoiDays::Days(d) => Some(d),
            RoiDays::NotApplicable => None,
        }
    }

    pub fn is_applicable(self) -> bool {
        matches!(self, RoiDays::Days(_))
    }

    /// Whole working days, rounded up
    pub fn ceil_days(self) -> Option<u64> {
        self.days().map(|d| d.ceil() as u64)
    }
}

impl Serialize for RoiDays {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RoiDays::Days(d) => serializer.serialize_f64(*d),
            RoiDays::NotApplicable => serializer.serialize_str(NOT_APPLICABLE),
        }
    }
}

impl<'de> Deserialize<'de> for RoiDays {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(d) => Ok(RoiDays::Days(d)),
            Raw::Text(s) if s == NOT_APPLICABLE => Ok(RoiDays::NotApplicable),
            Raw::Text(s) => Err(de::Error::custom(format!(
                "expected a number or \"{}\", got {:?}",
                NOT_APPLICABLE, s
            ))),
        }
    }
}

/// Savings metrics derived from [`CalculationInputs`](super::CalculationInputs)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResults {
    pub annual_savings: f64,
    pub monthly_savings: f64,
    /// May be negative when automation is slower than manual drafting
    pub hours_saved_annually: f64,
    /// Savings read as recoverable billable capacity; equals `annual_savings`
    pub opportunity_cost: f64,
    pub roi_days: RoiDays,
}

/// Monthly cost of each drafting regime, the series builder's inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCosts {
    pub manual: f64,
    pub automated: f64,
}

impl MonthlyCosts {
    pub fn savings_rate(&self) -> f64 {
        self.manual - self.automated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roi_days_wire_format() {
        assert_eq!(serde_json::to_string(&RoiDays::Days(5.5)).unwrap(), "5.5");
        assert_eq!(serde_json::to_string(&RoiDays::NotApplicable).unwrap(), "\"N/A\"");

        let parsed: RoiDays = serde_json::from_str("\"N/A\"").unwrap();
        assert_eq!(parsed, RoiDays::NotApplicable);
        let parsed: RoiDays = serde_json::from_str("12").unwrap();
        assert_eq!(parsed, RoiDays::Days(12.0));
        assert!(serde_json::from_str::<RoiDays>("\"soon\"").is_err());
    }

    #[test]
    fn test_ceil_days() {
        assert_eq!(RoiDays::Days(5.35).ceil_days(), Some(6));
        assert_eq!(RoiDays::Days(0.0).ceil_days(), Some(0));
        assert_eq!(RoiDays::NotApplicable.ceil_days(), None);
        assert!(!RoiDays::NotApplicable.is_applicable());
    }
}
