//! Raw employee attributes as entered on the form.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Slider range for `age`.
pub const AGE_RANGE: RangeInclusive<u32> = 17..=75;
/// Slider range for `education_level` (1 = Preschool, 16 = Doctorate).
pub const EDUCATION_RANGE: RangeInclusive<u32> = 1..=16;
/// Slider range for `hours_per_week`.
pub const HOURS_RANGE: RangeInclusive<u32> = 1..=100;

/// One set of form values, before categorical encoding.
///
/// Numeric fields are assumed to lie within the widget ranges; call
/// [`clamped`](Self::clamped) on anything that did not come from a widget.
/// Capital amounts are unsigned, so the non-negative constraint is carried
/// by the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub age: u32,
    pub workclass: String,
    pub education_level: u32,
    pub occupation: String,
    pub gender: String,
    #[serde(default)]
    pub capital_gain: u64,
    #[serde(default)]
    pub capital_loss: u64,
    pub hours_per_week: u32,
}

impl EmployeeInput {
    /// Form defaults for the numeric fields, with the given category labels.
    pub fn with_defaults(workclass: &str, occupation: &str, gender: &str) -> Self {
        Self {
            age: 30,
            workclass: workclass.to_string(),
            education_level: 10,
            occupation: occupation.to_string(),
            gender: gender.to_string(),
            capital_gain: 0,
            capital_loss: 0,
            hours_per_week: 40,
        }
    }

    /// Pull the slider fields into their widget ranges.
    pub fn clamped(mut self) -> Self {
        self.age = clamp(self.age, &AGE_RANGE);
        self.education_level = clamp(self.education_level, &EDUCATION_RANGE);
        self.hours_per_week = clamp(self.hours_per_week, &HOURS_RANGE);
        self
    }
}

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_initial_state() {
        let input = EmployeeInput::with_defaults("Private", "Sales", "Male");
        assert_eq!(input.age, 30);
        assert_eq!(input.education_level, 10);
        assert_eq!(input.hours_per_week, 40);
        assert_eq!(input.capital_gain, 0);
        assert_eq!(input.capital_loss, 0);
        assert_eq!(input.workclass, "Private");
    }

    #[test]
    fn clamped_pulls_values_into_range() {
        let mut input = EmployeeInput::with_defaults("Private", "Sales", "Male");
        input.age = 12;
        input.education_level = 40;
        input.hours_per_week = 0;

        let input = input.clamped();
        assert_eq!(input.age, 17);
        assert_eq!(input.education_level, 16);
        assert_eq!(input.hours_per_week, 1);
    }

    #[test]
    fn clamped_leaves_in_range_values_alone() {
        let input = EmployeeInput::with_defaults("Private", "Sales", "Male");
        assert_eq!(input.clone().clamped(), input);
    }

    #[test]
    fn capital_fields_default_to_zero_when_missing() {
        let json = r#"{
            "age": 45,
            "workclass": "Self-emp-inc",
            "education_level": 13,
            "occupation": "Exec-managerial",
            "gender": "Female",
            "hours_per_week": 50
        }"#;
        let input: EmployeeInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.capital_gain, 0);
        assert_eq!(input.capital_loss, 0);
        assert_eq!(input.occupation, "Exec-managerial");
    }

    #[test]
    fn negative_capital_rejected_by_type() {
        let json = r#"{
            "age": 45, "workclass": "Private", "education_level": 13,
            "occupation": "Sales", "gender": "Male",
            "capital_gain": -5, "hours_per_week": 50
        }"#;
        assert!(serde_json::from_str::<EmployeeInput>(json).is_err());
    }
}
