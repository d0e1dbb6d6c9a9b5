//! The `POST /predict` body and its conversion into an [`EmployeeInput`].
//!
//! Every field arrives as text. Numbers are clamped into their widget ranges
//! rather than rejected, and an empty number takes its form default, so a
//! cleared capital field reads as 0.

use salary_core::EmployeeInput;
use serde::Deserialize;
use thiserror::Error;

/// Raw form submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PredictForm {
    pub age: String,
    pub workclass: String,
    pub education_level: String,
    pub occupation: String,
    pub gender: String,
    pub capital_gain: String,
    pub capital_loss: String,
    pub hours_per_week: String,
}

/// A numeric field holding text that is not a number.
///
/// `echo` is the submission with that field (and any other bad one) replaced
/// by its default, for re-rendering the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} must be a number, got {value:?}")]
pub struct InvalidNumber {
    pub field: &'static str,
    pub value: String,
    pub echo: EmployeeInput,
}

impl PredictForm {
    /// Build a clamped [`EmployeeInput`], taking missing numbers from `defaults`.
    pub fn into_input(self, defaults: &EmployeeInput) -> Result<EmployeeInput, InvalidNumber> {
        let mut invalid: Option<(&'static str, String)> = None;
        let mut number = |field: &'static str, raw: &str, default: f64| -> f64 {
            match parse_number(raw) {
                Ok(Some(v)) => v,
                Ok(None) => default,
                Err(()) => {
                    invalid.get_or_insert_with(|| (field, raw.trim().to_string()));
                    default
                }
            }
        };

        let age = number("age", &self.age, f64::from(defaults.age));
        let education_level = number(
            "education_level",
            &self.education_level,
            f64::from(defaults.education_level),
        );
        let capital_gain = number(
            "capital_gain",
            &self.capital_gain,
            defaults.capital_gain as f64,
        );
        let capital_loss = number(
            "capital_loss",
            &self.capital_loss,
            defaults.capital_loss as f64,
        );
        let hours_per_week = number(
            "hours_per_week",
            &self.hours_per_week,
            f64::from(defaults.hours_per_week),
        );

        // Float-to-int `as` saturates: negatives become 0, overflow becomes MAX.
        let input = EmployeeInput {
            age: age.round() as u32,
            workclass: self.workclass,
            education_level: education_level.round() as u32,
            occupation: self.occupation,
            gender: self.gender,
            capital_gain: capital_gain.round() as u64,
            capital_loss: capital_loss.round() as u64,
            hours_per_week: hours_per_week.round() as u32,
        }
        .clamped();

        match invalid {
            Some((field, value)) => Err(InvalidNumber {
                field,
                value,
                echo: input,
            }),
            None => Ok(input),
        }
    }
}

/// `Ok(None)` for an empty value, `Err` for text that is not a number.
fn parse_number(raw: &str) -> Result<Option<f64>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(v) if !v.is_nan() => Ok(Some(v)),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> EmployeeInput {
        EmployeeInput::with_defaults("Private", "Sales", "Male")
    }

    fn form() -> PredictForm {
        PredictForm {
            age: "30".into(),
            workclass: "Private".into(),
            education_level: "10".into(),
            occupation: "Sales".into(),
            gender: "Male".into(),
            capital_gain: "0".into(),
            capital_loss: "0".into(),
            hours_per_week: "40".into(),
        }
    }

    #[test]
    fn plain_submission_converts() {
        assert_eq!(form().into_input(&defaults()).unwrap(), defaults());
    }

    #[test]
    fn empty_capital_reads_as_zero() {
        let mut f = form();
        f.capital_gain = String::new();
        f.capital_loss = "  ".into();
        let input = f.into_input(&defaults()).unwrap();
        assert_eq!(input.capital_gain, 0);
        assert_eq!(input.capital_loss, 0);
    }

    #[test]
    fn negative_and_oversized_values_are_clamped() {
        let mut f = form();
        f.age = "-3".into();
        f.education_level = "99999999999999999999".into();
        f.hours_per_week = "0".into();
        f.capital_loss = "-250".into();
        let input = f.into_input(&defaults()).unwrap();
        assert_eq!(input.age, 17);
        assert_eq!(input.education_level, 16);
        assert_eq!(input.hours_per_week, 1);
        assert_eq!(input.capital_loss, 0);
    }

    #[test]
    fn fractional_values_round() {
        let mut f = form();
        f.hours_per_week = "37.6".into();
        f.capital_gain = "1500.4".into();
        let input = f.into_input(&defaults()).unwrap();
        assert_eq!(input.hours_per_week, 38);
        assert_eq!(input.capital_gain, 1500);
    }

    #[test]
    fn missing_slider_takes_default() {
        let mut f = form();
        f.age = String::new();
        assert_eq!(f.into_input(&defaults()).unwrap().age, 30);
    }

    #[test]
    fn non_numeric_text_is_reported_with_echo() {
        let mut f = form();
        f.age = "52".into();
        f.hours_per_week = "forty".into();
        f.capital_gain = "NaN".into();

        let err = f.into_input(&defaults()).unwrap_err();
        assert_eq!(err.field, "capital_gain");
        assert_eq!(err.value, "NaN");
        assert_eq!(err.to_string(), "capital_gain must be a number, got \"NaN\"");
        assert_eq!(err.echo.age, 52);
        assert_eq!(err.echo.hours_per_week, 40);
        assert_eq!(err.echo.occupation, "Sales");
    }

    #[test]
    fn missing_fields_deserialize_empty() {
        let f: PredictForm = serde_json::from_str(r#"{"age": "41"}"#).unwrap();
        assert_eq!(f.age, "41");
        assert!(f.capital_gain.is_empty());
    }
}
