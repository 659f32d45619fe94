//! Overall risk level classification.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coarse classification of the overall weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[non_exhaustive]
pub enum RiskLevel {
    /// Score 80-100
    Low,
    /// Score 60-79
    Medium,
    /// Score 40-59
    High,
    /// Score below 40
    Critical,
}

impl RiskLevel {
    /// Classify an overall score, highest band first.
    ///
    /// Each band is inclusive on its lower bound: exactly 80 is `Low`,
    /// exactly 60 is `Medium`, exactly 40 is `High`.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score >= 80.0 {
            Self::Low
        } else if score >= 60.0 {
            Self::Medium
        } else if score >= 40.0 {
            Self::High
        } else {
            Self::Critical
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// One-line description of the maturity the level implies
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Low => "Solid security posture with room for refinement",
            Self::Medium => "Reasonable posture with notable gaps",
            Self::High => "Significant gaps requiring prompt attention",
            Self::Critical => "Severe exposure requiring immediate action",
        }
    }

    /// True for the most severe band
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }
}
