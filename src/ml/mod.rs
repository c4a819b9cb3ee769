/// Model serving for stage duration prediction
///
/// This module owns the serialized scoring bundle and the thin wrapper the
/// front-ends call:
/// - Artifact format (metadata + fitted encoder + fitted regressor)
/// - One-hot feature encoding of ticket fields
/// - Regression backends (random forest, linear) via smartcore
/// - The load-once, predict-per-call wrapper
pub mod artifact;
pub mod features;
pub mod regressor;
pub mod service;

pub use artifact::{ModelArtifact, ModelMetadata};
pub use features::FeatureEncoder;
pub use regressor::DurationRegressor;
pub use service::StageDurationModel;
