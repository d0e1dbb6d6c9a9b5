use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::Html;
use salary_ai::{Encoders, PredictError};
use salary_core::EmployeeInput;
use tracing::{error, warn};

use crate::AppState;
use crate::form::PredictForm;
use crate::page::{Outcome, render_page};

/// Form defaults, preselecting the first class of each encoder.
fn default_input(encoders: &Encoders) -> EmployeeInput {
    let first = |e: &salary_ai::CategoricalEncoder| {
        e.classes().first().cloned().unwrap_or_default()
    };
    EmployeeInput::with_defaults(
        &first(&encoders.workclass),
        &first(&encoders.occupation),
        &first(&encoders.gender),
    )
}

pub(crate) async fn form(State(state): State<Arc<AppState>>) -> Html<String> {
    let encoders = state.adapter.encoders();
    Html(render_page(encoders, &default_input(encoders), None))
}

pub(crate) async fn predict(
    State(state): State<Arc<AppState>>,
    form: Result<Form<PredictForm>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let encoders = state.adapter.encoders();
    let defaults = default_input(encoders);

    let input = match form.map(|Form(form)| form.into_input(&defaults)) {
        Ok(Ok(input)) => input,
        Ok(Err(invalid)) => {
            warn!(field = invalid.field, "non-numeric form value");
            let outcome = Outcome::Error(format!("Invalid form input: {invalid}"));
            return (
                StatusCode::BAD_REQUEST,
                Html(render_page(encoders, &invalid.echo, Some(&outcome))),
            );
        }
        Err(rejection) => {
            warn!(%rejection, "rejected form submission");
            let outcome = Outcome::Error(format!("Invalid form input: {}", rejection.body_text()));
            return (
                StatusCode::BAD_REQUEST,
                Html(render_page(encoders, &defaults, Some(&outcome))),
            );
        }
    };

    let (status, outcome) = match state.adapter.predict(&input) {
        Ok(result) => (StatusCode::OK, Outcome::Prediction(result)),
        Err(PredictError::UnknownCategory(e)) => {
            warn!(field = %e.field, "unknown category submitted");
            (StatusCode::BAD_REQUEST, Outcome::Error(e.to_string()))
        }
        Err(e @ PredictError::ClassifierInvocation(_)) => {
            error!(error = %e, "prediction failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Outcome::Error("Prediction failed. Please try again.".into()),
            )
        }
    };

    (status, Html(render_page(encoders, &input, Some(&outcome))))
}

pub(crate) async fn health() -> &'static str {
    "ok"
}
