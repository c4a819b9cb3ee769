use serde::{Deserialize, Serialize};

/// A snapshot of a work item sent for scoring.
///
/// One record per prediction call; constructed at the boundary and discarded
/// after the response is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTicket {
    /// Kind of work item (e.g. Bug, Feature, Improvement)
    pub issue_type: String,

    /// Urgency of the work item (e.g. Low, Medium, High, Critical)
    pub priority: String,

    /// Team that owns the work item
    pub team: String,

    /// Workflow column the item currently sits in
    pub current_stage: String,

    /// Relative effort estimate, unit-less
    pub story_points: u32,

    /// Stages the item has already passed through
    pub previous_stages_count: u32,

    /// Other items, approvals, or systems this item depends on
    pub num_dependencies: u32,
}

/// Presentation-only banding of a predicted duration.
///
/// Display policy for the web form, not a modeled property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// Band a predicted duration in days.
    pub fn for_days(days: f64) -> Self {
        if days <= 2.0 {
            RiskBand::Low
        } else if days <= 7.0 {
            RiskBand::Medium
        } else {
            RiskBand::High
        }
    }

    /// Human-readable label shown next to the estimate.
    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low risk",
            RiskBand::Medium => "Medium risk",
            RiskBand::High => "High risk",
        }
    }

    /// CSS class used by the form template.
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Medium => "medium",
            RiskBand::High => "high",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
