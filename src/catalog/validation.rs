//! Catalog validation.
//!
//! Malformed catalog configuration (empty categories, weights not summing
//! to 1.0, duplicate question ids) is a configuration defect to be caught
//! here at load time, not a runtime failure path in the engine.

use crate::model::Catalog;
use std::collections::HashSet;

/// Tolerance when checking that category weights sum to 1.0
pub const WEIGHT_SUM_TOLERANCE: f32 = 1e-3;

/// A single validation finding.
#[derive(Debug, Clone)]
pub struct CatalogIssue {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for CatalogIssue {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate, returning any issues found.
    fn validate(&self) -> Vec<CatalogIssue>;

    /// Check if the value is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for Catalog {
    fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        if self.categories.is_empty() {
            issues.push(CatalogIssue {
                field: "categories".to_string(),
                message: "Catalog must contain at least one category".to_string(),
            });
            return issues;
        }

        let mut seen_keys = HashSet::new();
        let mut seen_ids = HashSet::new();

        for (ci, category) in self.categories.iter().enumerate() {
            let field = |suffix: &str| format!("categories[{ci}].{suffix}");

            if category.key.is_empty() {
                issues.push(CatalogIssue {
                    field: field("key"),
                    message: "Category key must not be empty".to_string(),
                });
            }
            if !seen_keys.insert(category.key.clone()) {
                issues.push(CatalogIssue {
                    field: field("key"),
                    message: format!("Duplicate category key '{}'", category.key),
                });
            }

            if !(0.0..=1.0).contains(&category.weight) || category.weight == 0.0 {
                issues.push(CatalogIssue {
                    field: field("weight"),
                    message: format!(
                        "Weight must be in (0.0, 1.0], got {}",
                        category.weight
                    ),
                });
            }

            if category.questions.is_empty() {
                issues.push(CatalogIssue {
                    field: field("questions"),
                    message: "Category must contain at least one question".to_string(),
                });
            }

            for (qi, question) in category.questions.iter().enumerate() {
                let qfield = format!("categories[{ci}].questions[{qi}]");

                if question.id.is_empty() {
                    issues.push(CatalogIssue {
                        field: format!("{qfield}.id"),
                        message: "Question id must not be empty".to_string(),
                    });
                }
                if !seen_ids.insert(question.id.clone()) {
                    issues.push(CatalogIssue {
                        field: format!("{qfield}.id"),
                        message: format!("Duplicate question id '{}'", question.id),
                    });
                }
                if question.points == 0 {
                    issues.push(CatalogIssue {
                        field: format!("{qfield}.points"),
                        message: "Point value must be greater than zero".to_string(),
                    });
                }
            }
        }

        let weight_sum = self.weight_sum();
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            issues.push(CatalogIssue {
                field: "categories".to_string(),
                message: format!("Category weights must sum to 1.0, got {weight_sum}"),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Question};

    fn valid_catalog() -> Catalog {
        Catalog::new(vec![Category {
            key: "technical".to_string(),
            name: "Technical".to_string(),
            weight: 1.0,
            questions: vec![Question::new("t1", "Firewall?", 10)],
        }])
    }

    #[test]
    fn test_valid_catalog_passes() {
        assert!(valid_catalog().is_valid());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let catalog = Catalog::new(vec![]);
        let issues = catalog.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("at least one category"));
    }

    #[test]
    fn test_empty_category_rejected() {
        let mut catalog = valid_catalog();
        catalog.categories[0].questions.clear();
        assert!(!catalog.is_valid());
    }

    #[test]
    fn test_weight_sum_enforced() {
        let mut catalog = valid_catalog();
        catalog.categories[0].weight = 0.5;
        let issues = catalog.validate();
        assert!(
            issues.iter().any(|i| i.message.contains("sum to 1.0")),
            "expected weight sum issue: {issues:?}"
        );
    }

    #[test]
    fn test_weight_sum_tolerance() {
        let mut catalog = valid_catalog();
        catalog.categories[0].weight = 1.0 - 5e-4;
        assert!(
            catalog.is_valid(),
            "weights within tolerance must be accepted"
        );
    }

    #[test]
    fn test_duplicate_question_id_rejected() {
        let mut catalog = valid_catalog();
        catalog.categories[0]
            .questions
            .push(Question::new("t1", "Again?", 5));
        let issues = catalog.validate();
        assert!(issues.iter().any(|i| i.message.contains("Duplicate question id")));
    }

    #[test]
    fn test_zero_points_rejected() {
        let mut catalog = valid_catalog();
        catalog.categories[0].questions[0].points = 0;
        let issues = catalog.validate();
        assert!(issues.iter().any(|i| i.message.contains("greater than zero")));
    }

    #[test]
    fn test_zero_weight_rejected() {
        let mut catalog = valid_catalog();
        catalog.categories[0].weight = 0.0;
        let issues = catalog.validate();
        assert!(issues.iter().any(|i| i.field.contains("weight")));
    }

    #[test]
    fn test_issue_display() {
        let issue = CatalogIssue {
            field: "categories[0].weight".to_string(),
            message: "bad weight".to_string(),
        };
        assert_eq!(issue.to_string(), "categories[0].weight: bad weight");
    }
}
