//! Interactive web form
//!
//! Serves the prediction form and re-renders it with the estimate and its
//! risk band after submission. Templates are type-safe and compiled at build
//! time; the select widgets are populated from the loaded artifact's
//! vocabularies, so the form only offers values the model can score.

use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::ml::FeatureEncoder;
use crate::models::{RiskBand, StageTicket};
use askama::Template;
use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

/// Version string shown in the page footer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The prediction form page, with the outcome of the last submission when
/// one is present.
#[derive(Template)]
#[template(path = "predict.html")]
pub struct PredictPageTemplate {
    /// Issue types the model can score
    pub issue_types: Vec<String>,
    /// Priorities the model can score
    pub priorities: Vec<String>,
    /// Teams the model can score
    pub teams: Vec<String>,
    /// Workflow stages the model can score
    pub stages: Vec<String>,
    /// Current widget values
    pub form: FormValues,
    /// Rendered result of the last submission
    pub outcome: Option<Outcome>,
    /// Service version
    pub version: &'static str,
}

impl PredictPageTemplate {
    fn new(state: &AppState, form: FormValues, outcome: Option<Outcome>) -> Self {
        let encoder = state.model.encoder();
        Self {
            issue_types: encoder.issue_types().to_vec(),
            priorities: encoder.priorities().to_vec(),
            teams: encoder.teams().to_vec(),
            stages: encoder.stages().to_vec(),
            form,
            outcome,
            version: VERSION,
        }
    }
}

/// Widget values echoed back into the form on re-render.
pub struct FormValues {
    pub issue_type: String,
    pub priority: String,
    pub team: String,
    pub current_stage: String,
    pub story_points: u32,
    pub previous_stages_count: u32,
    pub num_dependencies: u32,
}

impl FormValues {
    /// First known value per category plus the starting numeric defaults.
    fn initial(encoder: &FeatureEncoder) -> Self {
        let first = |values: &[String]| values.first().cloned().unwrap_or_default();

        Self {
            issue_type: first(encoder.issue_types()),
            priority: first(encoder.priorities()),
            team: first(encoder.teams()),
            current_stage: first(encoder.stages()),
            story_points: 5,
            previous_stages_count: 1,
            num_dependencies: 2,
        }
    }

    fn from_ticket(ticket: &StageTicket) -> Self {
        Self {
            issue_type: ticket.issue_type.clone(),
            priority: ticket.priority.clone(),
            team: ticket.team.clone(),
            current_stage: ticket.current_stage.clone(),
            story_points: ticket.story_points,
            previous_stages_count: ticket.previous_stages_count,
            num_dependencies: ticket.num_dependencies,
        }
    }
}

/// Rendered result of a submission.
pub struct Outcome {
    /// Estimate rounded to two decimals for display
    pub days_display: String,
    /// Presentation band of the rounded estimate
    pub band: RiskBand,
}

/// Handler for the form page
pub async fn form_page(State(state): State<AppState>) -> Result<Html<String>> {
    let form = FormValues::initial(state.model.encoder());
    render(PredictPageTemplate::new(&state, form, None))
}

/// Form body for a prediction submission
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    pub issue_type: String,
    pub priority: String,
    pub team: String,
    pub current_stage: String,
    pub story_points: u32,
    pub previous_stages_count: u32,
    pub num_dependencies: u32,
}

/// Handler for a form submission
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> Result<Html<String>> {
    let ticket = StageTicket {
        issue_type: form.issue_type,
        priority: form.priority,
        team: form.team,
        current_stage: form.current_stage,
        story_points: form.story_points,
        previous_stages_count: form.previous_stages_count,
        num_dependencies: form.num_dependencies,
    };

    let prediction = state.model.predict(&ticket)?;
    let days = (prediction * 100.0).round() / 100.0;

    let outcome = Outcome {
        days_display: format!("{:.2}", days),
        band: RiskBand::for_days(days),
    };

    let values = FormValues::from_ticket(&ticket);
    render(PredictPageTemplate::new(&state, values, Some(outcome)))
}

fn render<T: Template>(template: T) -> Result<Html<String>> {
    template
        .render()
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Template error: {}", e)))
}
