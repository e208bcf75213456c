//! User-adjustable calculator inputs

use serde::{Deserialize, Serialize};

/// The five values driving the ROI model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationInputs {
    /// Billable rate, currency per hour
    pub hourly_rate: f64,

    /// Documents processed per month (continuous multiplier)
    pub monthly_volume: f64,

    /// Hours to draft one document manually
    pub hours_per_doc_manual: f64,

    /// Minutes to draft one document with automation
    pub minutes_per_doc_auto: f64,

    /// One-time implementation cost
    pub setup_cost: f64,
}

impl Default for CalculationInputs {
    fn default() -> Self {
        Self {
            hourly_rate: 450.0,
            monthly_volume: 8.0,
            hours_per_doc_manual: 2.5,
            minutes_per_doc_auto: 15.0,
            setup_cost: 2000.0,
        }
    }
}

/// Identifies one input and carries its slider metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    HourlyRate,
    MonthlyVolume,
    HoursPerDocManual,
    MinutesPerDocAuto,
    SetupCost,
}

impl InputField {
    pub const ALL: [InputField; 5] = [
        InputField::HourlyRate,
        InputField::MonthlyVolume,
        InputField::SetupCost,
        InputField::HoursPerDocManual,
        InputField::MinutesPerDocAuto,
    ];

    /// Wire name of the field
    pub fn id(self) -> &'static str {
        match self {
            InputField::HourlyRate => "hourlyRate",
            InputField::MonthlyVolume => "monthlyVolume",
            InputField::HoursPerDocManual => "hoursPerDocManual",
            InputField::MinutesPerDocAuto => "minutesPerDocAuto",
            InputField::SetupCost => "setupCost",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputField::HourlyRate => "Billable Hourly Rate",
            InputField::MonthlyVolume => "Agreements Per Month",
            InputField::HoursPerDocManual => "Manual Drafting Time",
            InputField::MinutesPerDocAuto => "Automated Time",
            InputField::SetupCost => "Implementation Fee",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            InputField::HourlyRate => "Your standard rate. Be honest!",
            InputField::MonthlyVolume => "How many of these headaches do you handle?",
            InputField::HoursPerDocManual => "Time spent wrestling with formatting manually.",
            InputField::MinutesPerDocAuto => "Time with LegalFlow (aka Magic Mode).",
            InputField::SetupCost => "One-time cost (the price of freedom).",
        }
    }

    /// Closed slider range (min, max)
    pub fn bounds(self) -> (f64, f64) {
        match self {
            InputField::HourlyRate => (200.0, 1500.0),
            InputField::MonthlyVolume => (1.0, 50.0),
            InputField::HoursPerDocManual => (0.5, 5.0),
            InputField::MinutesPerDocAuto => (5.0, 60.0),
            InputField::SetupCost => (0.0, 10_000.0),
        }
    }

    pub fn step(self) -> f64 {
        match self {
            InputField::HourlyRate => 25.0,
            InputField::MonthlyVolume => 1.0,
            InputField::HoursPerDocManual => 0.5,
            InputField::MinutesPerDocAuto => 5.0,
            InputField::SetupCost => 100.0,
        }
    }

    /// Display prefix and unit suffix
    pub fn affixes(self) -> (&'static str, &'static str) {
        match self {
            InputField::HourlyRate | InputField::SetupCost => ("$", ""),
            InputField::MonthlyVolume => ("", ""),
            InputField::HoursPerDocManual => ("", " hrs"),
            InputField::MinutesPerDocAuto => ("", " min"),
        }
    }
}

/// A rejected input value
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field_id: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field_id, self.message)
    }
}

impl CalculationInputs {
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::HourlyRate => self.hourly_rate,
            InputField::MonthlyVolume => self.monthly_volume,
            InputField::HoursPerDocManual => self.hours_per_doc_manual,
            InputField::MinutesPerDocAuto => self.minutes_per_doc_auto,
            InputField::SetupCost => self.setup_cost,
        }
    }

    pub fn set(&mut self, field: InputField, value: f64) {
        match field {
            InputField::HourlyRate => self.hourly_rate = value,
            InputField::MonthlyVolume => self.monthly_volume = value,
            InputField::HoursPerDocManual => self.hours_per_doc_manual = value,
            InputField::MinutesPerDocAuto => self.minutes_per_doc_auto = value,
            InputField::SetupCost => self.setup_cost = value,
        }
    }

    /// Check the domain the model is total over: finite and non-negative.
    ///
    /// Slider bounds are advisory and are not enforced here.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for field in InputField::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                errors.push(ValidationError {
                    field_id: field.id().to_string(),
                    message: "Value must be a finite number.".to_string(),
                });
            } else if value < 0.0 {
                errors.push(ValidationError {
                    field_id: field.id().to_string(),
                    message: "Value must not be negative.".to_string(),
                });
            }
        }

        errors
    }

    /// Copy with every field clamped to its slider range
    pub fn clamp_to_bounds(&self) -> Self {
        let mut clamped = *self;
        for field in InputField::ALL {
            let (min, max) = field.bounds();
            let value = self.get(field);
            let value = if value.is_nan() { min } else { value.clamp(min, max) };
            clamped.set(field, value);
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_initial_page_state() {
        let inputs = CalculationInputs::default();
        assert_eq!(inputs.hourly_rate, 450.0);
        assert_eq!(inputs.monthly_volume, 8.0);
        assert_eq!(inputs.hours_per_doc_manual, 2.5);
        assert_eq!(inputs.minutes_per_doc_auto, 15.0);
        assert_eq!(inputs.setup_cost, 2000.0);
    }

    #[test]
    fn test_defaults_within_bounds() {
        let inputs = CalculationInputs::default();
        assert_eq!(inputs.clamp_to_bounds(), inputs);
    }

    #[test]
    fn test_camel_case_wire_names_and_partial_body() {
        let inputs: CalculationInputs =
            serde_json::from_str(r#"{"hourlyRate": 300, "setupCost": 0}"#).unwrap();
        assert_eq!(inputs.hourly_rate, 300.0);
        assert_eq!(inputs.setup_cost, 0.0);
        assert_eq!(inputs.monthly_volume, 8.0);

        let json = serde_json::to_value(inputs).unwrap();
        assert!(json.get("hoursPerDocManual").is_some());
        assert!(json.get("minutesPerDocAuto").is_some());
    }

    #[test]
    fn test_validate_accepts_zero_and_out_of_range() {
        let inputs = CalculationInputs {
            hourly_rate: 0.0,
            monthly_volume: 500.0,
            hours_per_doc_manual: 0.0,
            minutes_per_doc_auto: 0.0,
            setup_cost: 1_000_000.0,
        };
        assert!(inputs.validate().is_empty());
    }

    #[test]
    fn test_validate_rejects_negative_and_non_finite() {
        let inputs = CalculationInputs {
            hourly_rate: -1.0,
            setup_cost: f64::INFINITY,
            ..Default::default()
        };
        let errors = inputs.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field_id == "hourlyRate"));
        assert!(errors.iter().any(|e| e.field_id == "setupCost"));
    }

    #[test]
    fn test_clamp_to_bounds() {
        let inputs = CalculationInputs {
            hourly_rate: 5000.0,
            monthly_volume: 0.0,
            hours_per_doc_manual: f64::NAN,
            ..Default::default()
        };
        let clamped = inputs.clamp_to_bounds();
        assert_eq!(clamped.hourly_rate, 1500.0);
        assert_eq!(clamped.monthly_volume, 1.0);
        assert_eq!(clamped.hours_per_doc_manual, 0.5);
    }
}
