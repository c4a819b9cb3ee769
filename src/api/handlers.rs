use crate::api::AppState;
use crate::error::Result;
use crate::models::StageTicket;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Static acknowledgement returned by the root route.
pub const ACK_MESSAGE: &str = "Agile Stage Duration API is running";

/// Root acknowledgement endpoint
pub async fn read_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ACK_MESSAGE.to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Metadata of the loaded model artifact
pub async fn model_info(State(state): State<AppState>) -> Json<ModelInfoResponse> {
    let metadata = state.model.metadata();

    Json(ModelInfoResponse {
        name: metadata.name.clone(),
        version: metadata.version.clone(),
        model: state.model.model_kind().to_string(),
        trained_at: metadata.trained_at,
        n_training_samples: metadata.n_training_samples,
        n_features: metadata.n_features,
    })
}

#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
    pub name: String,
    pub version: String,
    pub model: String,
    pub trained_at: chrono::DateTime<chrono::Utc>,
    pub n_training_samples: usize,
    pub n_features: usize,
}

/// Prediction endpoint
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>> {
    request.validate()?;

    let ticket = request.into_ticket();
    let predicted_days_in_stage = state.model.predict(&ticket)?;

    Ok(Json(PredictResponse {
        input: ticket,
        predicted_days_in_stage,
    }))
}

#[derive(Debug, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(length(min = 1))]
    pub issue_type: String,
    #[validate(length(min = 1))]
    pub priority: String,
    #[validate(length(min = 1))]
    pub team: String,
    #[validate(length(min = 1))]
    pub current_stage: String,
    #[validate(range(min = 1))]
    pub story_points: u32,
    pub previous_stages_count: u32,
    pub num_dependencies: u32,
}

impl PredictRequest {
    fn into_ticket(self) -> StageTicket {
        StageTicket {
            issue_type: self.issue_type,
            priority: self.priority,
            team: self.team,
            current_stage: self.current_stage,
            story_points: self.story_points,
            previous_stages_count: self.previous_stages_count,
            num_dependencies: self.num_dependencies,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Echo of the scored ticket
    pub input: StageTicket,

    /// Estimated days the ticket will remain in its current stage
    pub predicted_days_in_stage: f64,
}
