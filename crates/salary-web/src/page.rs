//! HTML rendering for the single prediction page.
//!
//! One page serves both states: the bare form, and the form followed by a
//! result (or error) panel with an echo of the submitted values.

use salary_ai::{CategoricalEncoder, Encoders};
use salary_core::input::{AGE_RANGE, EDUCATION_RANGE, HOURS_RANGE};
use salary_core::{EmployeeInput, IncomeCategory, PredictionResult};

/// What to show below the form.
#[derive(Debug, Clone)]
pub enum Outcome {
    Prediction(PredictionResult),
    Error(String),
}

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 56rem; margin: 2rem auto; color: #222; }
h1 { text-align: center; color: #007bff; }
.subtitle { text-align: center; color: gray; }
form { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem 2rem; }
label { display: block; font-weight: bold; margin-bottom: .25rem; }
input, select { width: 100%; }
button { grid-column: span 2; padding: .5rem; font-size: 1rem; }
.result { margin-top: 2rem; padding: 1rem; border-radius: .5rem; }
.high { background: #e6f4ea; }
.low { background: #fff4e5; }
.error { background: #fdecea; }
progress { width: 100%; }
footer { text-align: center; color: gray; margin-top: 3rem; }";

/// Render the whole page for `input`, with an optional outcome panel.
pub fn render_page(encoders: &Encoders, input: &EmployeeInput, outcome: Option<&Outcome>) -> String {
    let mut body = String::new();
    body.push_str("<h1>Employee Salary Prediction</h1>\n");
    body.push_str(
        "<p class=\"subtitle\">Estimate an employee's income category from key attributes.</p>\n",
    );
    body.push_str(&render_form(encoders, input));

    match outcome {
        Some(Outcome::Prediction(result)) => {
            body.push_str(&render_result(result));
            body.push_str(&render_details(input));
        }
        Some(Outcome::Error(message)) => {
            body.push_str(&format!(
                "<section class=\"result error\"><strong>{}</strong></section>\n",
                escape(message)
            ));
        }
        None => {}
    }

    body.push_str("<footer>Salary Predictor</footer>\n");

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Salary Prediction</title>\n<style>\n{STYLE}\n</style>\n</head>\n\
         <body>\n{body}</body>\n</html>\n"
    )
}

fn render_form(encoders: &Encoders, input: &EmployeeInput) -> String {
    let mut out = String::from("<form method=\"post\" action=\"/predict\">\n<div>\n");
    out.push_str(&slider("age", "Age", input.age, AGE_RANGE.start(), AGE_RANGE.end()));
    out.push_str(&slider(
        "education_level",
        "Education Level (1=Preschool, 16=Doctorate)",
        input.education_level,
        EDUCATION_RANGE.start(),
        EDUCATION_RANGE.end(),
    ));
    out.push_str(&slider(
        "hours_per_week",
        "Hours Worked per Week",
        input.hours_per_week,
        HOURS_RANGE.start(),
        HOURS_RANGE.end(),
    ));
    out.push_str(&select("gender", "Gender", &encoders.gender, &input.gender));
    out.push_str("</div>\n<div>\n");
    out.push_str(&select(
        "workclass",
        "Workclass",
        &encoders.workclass,
        &input.workclass,
    ));
    out.push_str(&select(
        "occupation",
        "Occupation",
        &encoders.occupation,
        &input.occupation,
    ));
    out.push_str(&number("capital_gain", "Capital Gain", input.capital_gain));
    out.push_str(&number("capital_loss", "Capital Loss", input.capital_loss));
    out.push_str("</div>\n<button type=\"submit\">Predict</button>\n</form>\n");
    out
}

fn slider(name: &str, label: &str, value: u32, min: &u32, max: &u32) -> String {
    format!(
        "<p><label for=\"{name}\">{label}: <output id=\"{name}_value\">{value}</output></label>\
         <input type=\"range\" id=\"{name}\" name=\"{name}\" min=\"{min}\" max=\"{max}\" \
         value=\"{value}\" oninput=\"{name}_value.value = this.value\"></p>\n"
    )
}

fn number(name: &str, label: &str, value: u64) -> String {
    format!(
        "<p><label for=\"{name}\">{label}</label>\
         <input type=\"number\" id=\"{name}\" name=\"{name}\" min=\"0\" step=\"1\" value=\"{value}\"></p>\n"
    )
}

fn select(name: &str, label: &str, encoder: &CategoricalEncoder, current: &str) -> String {
    let mut out = format!("<p><label for=\"{name}\">{label}</label><select id=\"{name}\" name=\"{name}\">");
    for class in encoder.classes() {
        let selected = if class == current { " selected" } else { "" };
        let class = escape(class);
        out.push_str(&format!("<option value=\"{class}\"{selected}>{class}</option>"));
    }
    out.push_str("</select></p>\n");
    out
}

fn render_result(result: &PredictionResult) -> String {
    let (class, delta) = match result.category {
        IncomeCategory::HighIncome => ("high", "+ High Income"),
        IncomeCategory::LowIncome => ("low", "- Low Income"),
    };

    let mut out = format!(
        "<section class=\"result {class}\">\n<h2>Result Summary</h2>\n<p>{}</p>\n\
         <p>Prediction: <strong>{}</strong> ({delta})</p>\n",
        escape(result.category.summary()),
        escape(result.category.band()),
    );

    if let (Some(confidence), Some(percent)) = (result.confidence, result.confidence_percent()) {
        out.push_str(&format!(
            "<progress value=\"{percent}\" max=\"100\"></progress>\n\
             <p class=\"confidence\">Confidence: {:.2}%</p>\n",
            confidence * 100.0
        ));
    }
    out.push_str("</section>\n");
    out
}

fn render_details(input: &EmployeeInput) -> String {
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

    let mut out = String::from("<section class=\"details\">\n<h3>Details Entered</h3>\n<ul>\n");
    for (label, value) in rows {
        out.push_str(&format!(
            "<li><strong>{label}</strong>: {}</li>\n",
            escape(&value)
        ));
    }
    out.push_str("</ul>\n</section>\n");
    out
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoders() -> Encoders {
        let enc = |field: &str, classes: &[&str]| {
            CategoricalEncoder::new(field, classes.iter().map(|s| s.to_string()).collect())
                .unwrap()
        };
        Encoders {
            gender: enc("gender", &["Female", "Male"]),
            workclass: enc("workclass", &["Private", "State-gov"]),
            occupation: enc("occupation", &["Sales", "Tech-support"]),
        }
    }

    fn input() -> EmployeeInput {
        EmployeeInput::with_defaults("Private", "Sales", "Male")
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b class="x">Tom & 'Jerry'</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("Adm-clerical"), "Adm-clerical");
    }

    #[test]
    fn form_offers_encoder_classes_and_marks_selection() {
        let html = render_page(&encoders(), &input(), None);
        assert!(html.contains("<option value=\"Female\">Female</option>"));
        assert!(html.contains("<option value=\"Male\" selected>Male</option>"));
        assert!(html.contains("<option value=\"Tech-support\">Tech-support</option>"));
        assert!(html.contains("min=\"17\" max=\"75\" value=\"30\""));
        assert!(html.contains("min=\"1\" max=\"16\" value=\"10\""));
        assert!(html.contains("min=\"1\" max=\"100\" value=\"40\""));
        assert!(!html.contains("Result Summary"));
    }

    #[test]
    fn result_panel_with_confidence() {
        let outcome = Outcome::Prediction(PredictionResult {
            category: IncomeCategory::HighIncome,
            confidence: Some(0.8765),
        });
        let html = render_page(&encoders(), &input(), Some(&outcome));
        assert!(html.contains("more than 50K"));
        assert!(html.contains("+ High Income"));
        assert!(html.contains("<progress value=\"87\" max=\"100\">"));
        assert!(html.contains("Confidence: 87.65%"));
        assert!(html.contains("<li><strong>Hours/Week</strong>: 40</li>"));
    }

    #[test]
    fn zero_confidence_still_rendered() {
        let outcome = Outcome::Prediction(PredictionResult {
            category: IncomeCategory::LowIncome,
            confidence: Some(0.0),
        });
        let html = render_page(&encoders(), &input(), Some(&outcome));
        assert!(html.contains("Confidence: 0.00%"));
        assert!(html.contains("<progress value=\"0\" max=\"100\">"));
    }

    #[test]
    fn absent_confidence_omits_bar() {
        let outcome = Outcome::Prediction(PredictionResult {
            category: IncomeCategory::LowIncome,
            confidence: None,
        });
        let html = render_page(&encoders(), &input(), Some(&outcome));
        assert!(html.contains("50K or less"));
        assert!(!html.contains("<progress"));
        assert!(!html.contains("Confidence:"));
    }

    #[test]
    fn error_panel_is_escaped() {
        let outcome = Outcome::Error("unknown gender category: \"<x>\"".into());
        let html = render_page(&encoders(), &input(), Some(&outcome));
        assert!(html.contains("&lt;x&gt;"));
        assert!(!html.contains("Details Entered"));
    }
}
