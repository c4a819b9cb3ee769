#![allow(dead_code)]

use chrono::Utc;
use ndarray::Array2;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressorParameters;
use stage_duration_predictor::api::AppState;
use stage_duration_predictor::ml::{
    DurationRegressor, FeatureEncoder, ModelArtifact, ModelMetadata, StageDurationModel,
};
use stage_duration_predictor::models::StageTicket;
use std::sync::Arc;

pub fn sample_encoder() -> FeatureEncoder {
    FeatureEncoder::new(
        vec!["Bug".into(), "Feature".into(), "Improvement".into()],
        vec!["Low".into(), "Medium".into(), "High".into(), "Critical".into()],
        vec!["Team A".into(), "Team B".into(), "Team C".into()],
        vec![
            "Backlog".into(),
            "In Progress".into(),
            "Code Review".into(),
            "Testing".into(),
            "Done".into(),
        ],
    )
}

pub fn sample_ticket() -> StageTicket {
    StageTicket {
        issue_type: "Feature".to_string(),
        priority: "High".to_string(),
        team: "Team A".to_string(),
        current_stage: "Testing".to_string(),
        story_points: 8,
        previous_stages_count: 1,
        num_dependencies: 2,
    }
}

/// Fit a small forest over a synthetic grid covering every category.
pub fn trained_artifact() -> ModelArtifact {
    let encoder = sample_encoder();

    let mut tickets = Vec::new();
    for (i, issue_type) in encoder.issue_types().iter().enumerate() {
        for (j, stage) in encoder.stages().iter().enumerate() {
            for (k, team) in encoder.teams().iter().enumerate() {
                let priorities = encoder.priorities();
                let priority = &priorities[(i + j + k) % priorities.len()];

                tickets.push(StageTicket {
                    issue_type: issue_type.clone(),
                    priority: priority.clone(),
                    team: team.clone(),
                    current_stage: stage.clone(),
                    story_points: 1 + ((i + 2 * j + k) % 13) as u32,
                    previous_stages_count: (j % 5) as u32,
                    num_dependencies: ((i + k) % 7) as u32,
                });
            }
        }
    }

    let n_samples = tickets.len();
    let n_features = encoder.n_features();
    let mut x = Array2::zeros((n_samples, n_features));
    let mut y = Vec::with_capacity(n_samples);

    for (row, ticket) in tickets.iter().enumerate() {
        let features = encoder.transform(ticket).expect("grid tickets encode");
        x.row_mut(row).assign(&features);

        y.push(
            1.0 + 0.6 * f64::from(ticket.story_points)
                + 1.2 * f64::from(ticket.num_dependencies)
                + 0.5 * f64::from(ticket.previous_stages_count),
        );
    }

    let params = RandomForestRegressorParameters::default()
        .with_n_trees(32)
        .with_seed(17);
    let regressor = DurationRegressor::fit_random_forest(&x, &y, params).expect("forest fits");

    ModelArtifact {
        metadata: ModelMetadata {
            name: "stage-duration".to_string(),
            version: "test".to_string(),
            trained_at: Utc::now(),
            n_training_samples: n_samples,
            n_features,
        },
        encoder,
        regressor,
    }
}

pub fn test_model() -> StageDurationModel {
    StageDurationModel::from_artifact(trained_artifact())
}

pub fn test_state() -> AppState {
    AppState::new(Arc::new(test_model()))
}
