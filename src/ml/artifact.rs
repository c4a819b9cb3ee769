use crate::error::{AppError, Result};
use crate::ml::features::FeatureEncoder;
use crate::ml::regressor::DurationRegressor;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Metadata recorded by the training run that produced an artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model name
    pub name: String,

    /// Model version
    pub version: String,

    /// Training timestamp
    pub trained_at: chrono::DateTime<chrono::Utc>,

    /// Number of training samples
    pub n_training_samples: usize,

    /// Number of features
    pub n_features: usize,
}

/// The serialized scoring bundle: everything needed to score a ticket.
///
/// Produced by external training tooling as a portable JSON document and
/// loaded read-only here. The bundle is versionless beyond its metadata and
/// is never modified by this service.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Training provenance
    pub metadata: ModelMetadata,

    /// Fitted categorical vocabularies and column layout
    pub encoder: FeatureEncoder,

    /// Fitted regression model
    pub regressor: DurationRegressor,
}

impl ModelArtifact {
    /// Load an artifact from disk.
    ///
    /// Any failure here is terminal for the caller; there is no fallback
    /// artifact and no retry.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            AppError::Model(format!(
                "Cannot open model artifact {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            AppError::Model(format!(
                "Cannot decode model artifact {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Write an artifact to disk. Used by training tooling and test fixtures.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| {
            AppError::Model(format!(
                "Cannot create model artifact {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_json::to_writer(BufWriter::new(file), self).map_err(|e| {
            AppError::Model(format!(
                "Cannot encode model artifact {}: {}",
                path.display(),
                e
            ))
        })
    }
}
