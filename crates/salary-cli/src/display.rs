//! Terminal rendering for prediction results and encoder listings.

use arrow::util::pretty::pretty_format_batches;
use salary_ai::Encoders;
use salary_core::{EmployeeInput, FeatureVector, IncomeCategory, PredictionResult};

/// Result card: headline, band, confidence, then the entered values.
pub fn format_result_card(input: &EmployeeInput, result: &PredictionResult) -> String {
    let delta = match result.category {
        IncomeCategory::HighIncome => "+ High Income",
        IncomeCategory::LowIncome => "- Low Income",
    };

    let mut out = String::new();
    out.push_str("=== Result Summary ===\n");
    out.push_str(result.category.summary());
    out.push_str("\n\n");
    out.push_str(&format!(
        "  {:<18} {} ({delta})\n",
        "Prediction",
        result.category.band()
    ));
    match result.confidence {
        Some(p) => out.push_str(&format!("  {:<18} {:.2}%\n", "Confidence", p * 100.0)),
        None => out.push_str(&format!("  {:<18} n/a\n", "Confidence")),
    }

    out.push_str("\nDetails Entered\n");
    let rows = [
        ("Age", input.age.to_string()),
        ("Education Level", input.education_level.to_string()),
        ("Gender", input.gender.clone()),
        ("Workclass", input.workclass.clone()),
        ("Occupation", input.occupation.clone()),
        ("Capital Gain", input.capital_gain.to_string()),
        ("Capital Loss", input.capital_loss.to_string()),
        ("Hours/Week", input.hours_per_week.to_string()),
    ];
    for (label, value) in rows {
        out.push_str(&format!("  {label:<18} {value}\n"));
    }
    out
}

/// The encoded row as an Arrow table, columns in training order.
pub fn format_feature_table(features: &FeatureVector) -> anyhow::Result<String> {
    let batch = features.to_record_batch()?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}

/// Every encoder's classes with their codes.
pub fn format_classes(encoders: &Encoders) -> String {
    let mut out = String::new();
    for encoder in encoders.iter() {
        out.push_str(&format!("{} ({})\n", encoder.field(), encoder.len()));
        for (code, class) in encoder.classes().iter().enumerate() {
            out.push_str(&format!("  {code:>3}  {class}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use salary_ai::CategoricalEncoder;

    fn input() -> EmployeeInput {
        EmployeeInput::with_defaults("Private", "Sales", "Male")
    }

    #[test]
    fn card_with_confidence() {
        let card = format_result_card(
            &input(),
            &PredictionResult {
                category: IncomeCategory::LowIncome,
                confidence: Some(0.8434),
            },
        );
        assert!(card.contains("earn 50K or less"));
        assert!(card.contains("<= 50K (- Low Income)"));
        assert!(card.contains("84.34%"));
        assert!(card.contains("  Occupation         Sales\n"));
    }

    #[test]
    fn card_without_confidence() {
        let card = format_result_card(
            &input(),
            &PredictionResult {
                category: IncomeCategory::HighIncome,
                confidence: None,
            },
        );
        assert!(card.contains("> 50K (+ High Income)"));
        assert!(card.contains("Confidence         n/a"));
    }

    #[test]
    fn feature_table_lists_columns_in_order() {
        let v = FeatureVector::from_array([30.0, 3.0, 10.0, 12.0, 1.0, 0.0, 0.0, 40.0]);
        let table = format_feature_table(&v).unwrap();
        let age = table.find("| age").unwrap();
        let workclass = table.find("| workclass").unwrap();
        let hours = table.find("| hours-per-week").unwrap();
        assert!(age < workclass && workclass < hours);
        assert!(table.contains("40.0"));
    }

    #[test]
    fn classes_listing() {
        let enc = |field: &str, classes: &[&str]| {
            CategoricalEncoder::new(field, classes.iter().map(|s| s.to_string()).collect())
                .unwrap()
        };
        let encoders = Encoders {
            gender: enc("gender", &["Female", "Male"]),
            workclass: enc("workclass", &["Private"]),
            occupation: enc("occupation", &["Sales", "Tech-support"]),
        };
        let listing = format_classes(&encoders);
        assert!(listing.starts_with("workclass (1)\n    0  Private\n"));
        assert!(listing.contains("gender (2)\n    0  Female\n    1  Male\n"));
    }
}
