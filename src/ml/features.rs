use crate::error::{AppError, Result};
use crate::models::StageTicket;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Fitted feature encoder for stage tickets.
///
/// Carries the categorical vocabularies the training run saw, in their fitted
/// column order. A ticket is encoded as the one-hot expansion of its four
/// categorical fields followed by the three numeric fields. Vocabulary order
/// defines column order, so the encoder must not be rebuilt independently of
/// the regressor it was fitted with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureEncoder {
    /// Known issue types, in column order
    issue_types: Vec<String>,

    /// Known priorities, in column order
    priorities: Vec<String>,

    /// Known teams, in column order
    teams: Vec<String>,

    /// Known workflow stages, in column order
    stages: Vec<String>,
}

impl FeatureEncoder {
    /// Build an encoder from fitted vocabularies.
    pub fn new(
        issue_types: Vec<String>,
        priorities: Vec<String>,
        teams: Vec<String>,
        stages: Vec<String>,
    ) -> Self {
        Self {
            issue_types,
            priorities,
            teams,
            stages,
        }
    }

    /// Total width of the encoded feature vector.
    pub fn n_features(&self) -> usize {
        self.issue_types.len() + self.priorities.len() + self.teams.len() + self.stages.len() + 3
    }

    /// Encode a ticket into a single feature row.
    ///
    /// Unknown categorical values are the artifact's enforcement boundary:
    /// they surface as an error naming the offending field.
    pub fn transform(&self, ticket: &StageTicket) -> Result<Array1<f64>> {
        let mut features = Array1::zeros(self.n_features());
        let mut offset = 0;

        offset = self.one_hot(
            &mut features,
            offset,
            &self.issue_types,
            &ticket.issue_type,
            "issue_type",
        )?;
        offset = self.one_hot(
            &mut features,
            offset,
            &self.priorities,
            &ticket.priority,
            "priority",
        )?;
        offset = self.one_hot(&mut features, offset, &self.teams, &ticket.team, "team")?;
        offset = self.one_hot(
            &mut features,
            offset,
            &self.stages,
            &ticket.current_stage,
            "current_stage",
        )?;

        features[offset] = f64::from(ticket.story_points);
        features[offset + 1] = f64::from(ticket.previous_stages_count);
        features[offset + 2] = f64::from(ticket.num_dependencies);

        Ok(features)
    }

    fn one_hot(
        &self,
        features: &mut Array1<f64>,
        offset: usize,
        vocabulary: &[String],
        value: &str,
        field: &'static str,
    ) -> Result<usize> {
        let index = vocabulary
            .iter()
            .position(|known| known == value)
            .ok_or_else(|| AppError::UnknownCategory {
                field,
                value: value.to_string(),
            })?;

        features[offset + index] = 1.0;
        Ok(offset + vocabulary.len())
    }

    /// Issue types the model can score.
    pub fn issue_types(&self) -> &[String] {
        &self.issue_types
    }

    /// Priorities the model can score.
    pub fn priorities(&self) -> &[String] {
        &self.priorities
    }

    /// Teams the model can score.
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// Workflow stages the model can score.
    pub fn stages(&self) -> &[String] {
        &self.stages
    }
}
