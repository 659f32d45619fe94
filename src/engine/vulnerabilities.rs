//! Vulnerability extraction: failed checks ranked by severity.

use crate::model::{AnswerSet, Catalog};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Point value at or above which a failed check is high severity
const HIGH_SEVERITY_POINTS: u32 = 15;
/// Point value at or above which a failed check is medium severity
const MEDIUM_SEVERITY_POINTS: u32 = 10;

/// Coarse severity of a failed check, derived from its point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Derive severity from a question's point value
    #[must_use]
    pub const fn from_points(points: u32) -> Self {
        if points >= HIGH_SEVERITY_POINTS {
            Self::High
        } else if points >= MEDIUM_SEVERITY_POINTS {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Numeric rank for ordering (high=3, medium=2, low=1)
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Uppercase badge label for terminal output
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

/// A failed check: a question explicitly answered "no".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Vulnerability {
    /// Display name of the owning category
    pub category: String,
    /// Id of the failed question (keys the remediation knowledge base)
    pub question_id: String,
    /// Text of the failed question
    pub question: String,
    /// Severity tier derived from the question's point value
    pub severity: Severity,
}

/// Collect one [`Vulnerability`] per question answered exactly "no".
///
/// Unanswered questions are NOT flagged; only an explicit negative answer
/// is a finding. The result is sorted descending by severity; the sort is
/// stable, so equal-severity entries keep catalog traversal order
/// (category order, then question order within each category).
#[must_use]
pub fn extract_vulnerabilities(catalog: &Catalog, answers: &AnswerSet) -> Vec<Vulnerability> {
    let mut vulns = Vec::new();

    for category in &catalog.categories {
        for question in &category.questions {
            if answers.is_no(&question.id) {
                vulns.push(Vulnerability {
                    category: category.name.clone(),
                    question_id: question.id.clone(),
                    question: question.text.clone(),
                    severity: Severity::from_points(question.points),
                });
            }
        }
    }

    // Vec::sort_by_key is stable, which the determinism contract relies on
    vulns.sort_by_key(|v| Reverse(v.severity.rank()));
    vulns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, Category, Question};

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(Severity::from_points(20), Severity::High);
        assert_eq!(Severity::from_points(15), Severity::High);
        assert_eq!(Severity::from_points(14), Severity::Medium);
        assert_eq!(Severity::from_points(10), Severity::Medium);
        assert_eq!(Severity::from_points(9), Severity::Low);
        assert_eq!(Severity::from_points(1), Severity::Low);
    }

    fn catalog_with_mixed_points() -> Catalog {
        Catalog::new(vec![
            Category {
                key: "a".to_string(),
                name: "Alpha".to_string(),
                weight: 0.5,
                questions: vec![
                    Question::new("a1", "Low check?", 5),
                    Question::new("a2", "High check?", 15),
                    Question::new("a3", "Medium check?", 10),
                ],
            },
            Category {
                key: "b".to_string(),
                name: "Beta".to_string(),
                weight: 0.5,
                questions: vec![
                    Question::new("b1", "Another high check?", 20),
                    Question::new("b2", "Another medium check?", 12),
                ],
            },
        ])
    }

    #[test]
    fn test_only_explicit_no_is_flagged() {
        let catalog = catalog_with_mixed_points();
        let mut answers = AnswerSet::new();
        answers.insert("a1", Answer::No);
        answers.insert("a2", Answer::Yes);
        // a3, b1, b2 unanswered

        let vulns = extract_vulnerabilities(&catalog, &answers);
        assert_eq!(vulns.len(), 1);
        assert_eq!(vulns[0].question_id, "a1");
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let catalog = catalog_with_mixed_points();
        let answers: AnswerSet = catalog
            .questions()
            .map(|q| (q.id.clone(), Answer::No))
            .collect();

        let vulns = extract_vulnerabilities(&catalog, &answers);
        let ids: Vec<_> = vulns.iter().map(|v| v.question_id.as_str()).collect();

        // High (a2 before b1, catalog order), then medium (a3 before b2), then low
        assert_eq!(ids, vec!["a2", "b1", "a3", "b2", "a1"]);
    }

    #[test]
    fn test_vulnerability_carries_category_name() {
        let catalog = catalog_with_mixed_points();
        let mut answers = AnswerSet::new();
        answers.insert("b1", Answer::No);

        let vulns = extract_vulnerabilities(&catalog, &answers);
        assert_eq!(vulns[0].category, "Beta");
        assert_eq!(vulns[0].severity, Severity::High);
    }

    #[test]
    fn test_all_yes_yields_no_findings() {
        let catalog = catalog_with_mixed_points();
        let answers: AnswerSet = catalog
            .questions()
            .map(|q| (q.id.clone(), Answer::Yes))
            .collect();

        assert!(extract_vulnerabilities(&catalog, &answers).is_empty());
    }
}
