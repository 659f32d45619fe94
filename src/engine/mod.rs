//! Posture assessment engine.
//!
//! Pure, deterministic computation over a static catalog and a single
//! answer set. Data flows one direction: catalog → {scoring, vulnerability
//! extraction} → recommendation generation → assembled report. No stage
//! mutates another's output, and the engine never mutates its inputs, so
//! [`evaluate`] is idempotent and safe to call from any thread.
//!
//! # Usage
//!
//! ```
//! use posture_tools::catalog::builtin_catalog;
//! use posture_tools::engine::evaluate;
//! use posture_tools::model::{Answer, AnswerSet};
//!
//! let catalog = builtin_catalog();
//! let answers: AnswerSet = catalog
//!     .questions()
//!     .map(|q| (q.id.clone(), Answer::Yes))
//!     .collect();
//!
//! let report = evaluate(catalog, &answers);
//! assert!(report.overall_score > 99.0);
//! assert!(report.vulnerabilities.is_empty());
//! ```

mod recommendations;
mod report;
mod risk;
mod scoring;
mod vulnerabilities;

pub use recommendations::{
    MAX_RECOMMENDATIONS, Priority, Recommendation, generate_recommendations,
};
pub use report::{CategoryScore, DiagnosticReport, report_schema};
pub use risk::RiskLevel;
pub use scoring::score_categories;
pub use vulnerabilities::{Severity, Vulnerability, extract_vulnerabilities};

use crate::model::{AnswerSet, Catalog};
use chrono::Utc;

/// Run a full diagnostic over the given catalog and answers.
///
/// Composes scoring, vulnerability extraction, recommendation generation,
/// and risk classification into one immutable [`DiagnosticReport`], stamped
/// with the generation time. Always succeeds given a well-formed catalog.
///
/// Callers are expected to supply one answer per catalog question (the CLI
/// enforces this completion gate); partial answer sets are nevertheless
/// well-defined input: an absent answer counts as "no" for scoring but is
/// never reported as a vulnerability.
#[must_use]
pub fn evaluate(catalog: &Catalog, answers: &AnswerSet) -> DiagnosticReport {
    let (category_scores, overall_score) = score_categories(catalog, answers);
    let vulnerabilities = extract_vulnerabilities(catalog, answers);
    let recommendations = generate_recommendations(&category_scores, &vulnerabilities);
    let risk_level = RiskLevel::from_score(overall_score);

    DiagnosticReport {
        overall_score,
        category_scores,
        risk_level,
        vulnerabilities,
        recommendations,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use crate::model::Answer;

    fn all_answered(answer: Answer) -> AnswerSet {
        builtin_catalog()
            .questions()
            .map(|q| (q.id.clone(), answer))
            .collect()
    }

    #[test]
    fn test_all_yes_is_low_risk_with_no_findings() {
        let report = evaluate(builtin_catalog(), &all_answered(Answer::Yes));

        assert!((report.overall_score - 100.0).abs() < 1e-3);
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert!(report.vulnerabilities.is_empty());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_all_no_is_critical() {
        let catalog = builtin_catalog();
        let report = evaluate(catalog, &all_answered(Answer::No));

        assert!(report.overall_score.abs() < 1e-6);
        assert_eq!(report.risk_level, RiskLevel::Critical);
        assert_eq!(report.vulnerabilities.len(), catalog.question_count());
        for score in report.category_scores.values() {
            assert_eq!(score.earned_points, 0);
            assert!(score.score.abs() < 1e-6);
        }
    }

    #[test]
    fn test_empty_answers_scores_zero_without_vulnerabilities() {
        let report = evaluate(builtin_catalog(), &AnswerSet::new());

        assert!(report.overall_score.abs() < 1e-6);
        // Absent answers count as "no" for scoring but are not findings
        assert!(report.vulnerabilities.is_empty());
        // Category-level recommendations still fire on the low scores
        assert!(!report.recommendations.is_empty());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let catalog = builtin_catalog();
        let answers = all_answered(Answer::No);

        let first = evaluate(catalog, &answers);
        let second = evaluate(catalog, &answers);

        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(first.category_scores, second.category_scores);
        assert_eq!(first.vulnerabilities, second.vulnerabilities);
        assert_eq!(first.recommendations, second.recommendations);
        // generated_at may differ between the two runs
    }

    #[test]
    fn test_category_scores_keyed_in_catalog_order() {
        let report = evaluate(builtin_catalog(), &AnswerSet::new());
        let keys: Vec<_> = report.category_scores.keys().cloned().collect();
        assert_eq!(keys, vec!["technical", "human", "organizational"]);
    }
}
