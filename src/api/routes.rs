use crate::api::{handlers, AppState};
use crate::ui;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

/// Build the main API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Acknowledgement and health endpoints
        .route("/", get(handlers::read_root))
        .route("/health", get(handlers::health_check))
        // Model metadata
        .route("/model", get(handlers::model_info))
        // Prediction API
        .route("/predict", post(handlers::predict))
        // Interactive web form
        .route("/ui", get(ui::form_page).post(ui::submit_form))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
}
