pub mod handlers;
pub mod routes;

pub use routes::*;

use crate::ml::StageDurationModel;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The loaded model, immutable after startup
    pub model: Arc<StageDurationModel>,

    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    pub fn new(model: Arc<StageDurationModel>) -> Self {
        Self {
            model,
            started_at: Instant::now(),
        }
    }
}
