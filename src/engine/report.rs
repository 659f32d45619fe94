//! Assembled diagnostic report types.

use super::recommendations::Recommendation;
use super::risk::RiskLevel;
use super::vulnerabilities::{Severity, Vulnerability};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-category scoring breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryScore {
    /// Display name of the category
    pub name: String,
    /// Percentage score, 0-100
    pub score: f32,
    /// Points earned from "yes" answers
    pub earned_points: u32,
    /// Sum of point values of every question in the category
    pub max_points: u32,
}

/// Complete diagnostic report for one evaluation run.
///
/// Immutable once constructed; a new report is produced per
/// [`crate::engine::evaluate`] call, never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[must_use]
pub struct DiagnosticReport {
    /// Weighted overall score, 0-100
    pub overall_score: f32,
    /// Per-category scores, keyed by category key in catalog order
    pub category_scores: IndexMap<String, CategoryScore>,
    /// Risk classification of the overall score
    pub risk_level: RiskLevel,
    /// Failed checks, sorted descending by severity
    pub vulnerabilities: Vec<Vulnerability>,
    /// Prioritized remediation plan, at most 8 entries
    pub recommendations: Vec<Recommendation>,
    /// When this report was generated
    pub generated_at: DateTime<Utc>,
}

impl DiagnosticReport {
    /// Number of high-severity vulnerabilities
    #[must_use]
    pub fn high_severity_count(&self) -> usize {
        self.vulnerabilities
            .iter()
            .filter(|v| v.severity == Severity::High)
            .count()
    }

    /// Number of categories scoring below the given threshold
    #[must_use]
    pub fn categories_below(&self, threshold: f32) -> usize {
        self.category_scores
            .values()
            .filter(|s| s.score < threshold)
            .count()
    }
}

/// Generate a JSON Schema for the diagnostic report format.
///
/// Documents the structure consumers of `-o json` output can rely on.
#[must_use]
pub fn report_schema() -> String {
    let schema = schemars::schema_for!(DiagnosticReport);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}
