use crate::error::Result;
use crate::ml::artifact::{ModelArtifact, ModelMetadata};
use crate::ml::features::FeatureEncoder;
use crate::models::StageTicket;
use std::path::Path;
use tracing::info;

/// The prediction wrapper: loads the scoring bundle once and serves
/// single-row predictions from it.
///
/// Holds no mutable state after the load, so it is shared between request
/// handlers behind a plain `Arc` with no locking. Each call encodes one
/// ticket and forwards it to the regressor; nothing is cached or retried.
pub struct StageDurationModel {
    artifact: ModelArtifact,
}

impl StageDurationModel {
    /// Load the artifact from disk. A failure here aborts startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let artifact = ModelArtifact::load(path)?;

        info!(
            path = %path.display(),
            name = %artifact.metadata.name,
            version = %artifact.metadata.version,
            model = artifact.regressor.kind(),
            n_features = artifact.metadata.n_features,
            "Model artifact loaded"
        );

        Ok(Self { artifact })
    }

    /// Wrap an already-deserialized artifact. Used by tests and tooling.
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self { artifact }
    }

    /// Predict how many days a ticket will stay in its current stage.
    pub fn predict(&self, ticket: &StageTicket) -> Result<f64> {
        let features = self.artifact.encoder.transform(ticket)?;
        self.artifact.regressor.predict_one(&features)
    }

    /// Training provenance of the loaded artifact.
    pub fn metadata(&self) -> &ModelMetadata {
        &self.artifact.metadata
    }

    /// Model family of the loaded regressor.
    pub fn model_kind(&self) -> &'static str {
        self.artifact.regressor.kind()
    }

    /// The fitted encoder, exposing the vocabularies the model can score.
    pub fn encoder(&self) -> &FeatureEncoder {
        &self.artifact.encoder
    }
}
