//! Prioritized remediation plan generation.
//!
//! Two sources feed the plan, concatenated in a fixed order and capped:
//! category-level recommendations for weak categories first, then
//! recommendations for the top-ranked individual vulnerabilities. The text
//! comes from a static knowledge base; lookups that miss fall back to
//! generic wording rather than failing.

use super::report::CategoryScore;
use super::vulnerabilities::{Severity, Vulnerability};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum number of recommendations in a report
pub const MAX_RECOMMENDATIONS: usize = 8;

/// How many of the top-ranked vulnerabilities get individual recommendations
const VULNERABILITY_RECOMMENDATION_CAP: usize = 5;

/// Category score below which a critical recommendation is emitted
const CRITICAL_SCORE_THRESHOLD: f32 = 50.0;
/// Category score below which a high recommendation is emitted
const HIGH_SCORE_THRESHOLD: f32 = 70.0;

/// Priority attached to a recommendation, driving display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Numeric rank for ordering (critical=4 down to low=1)
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Display label for terminal output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "1 - URGENT",
            Self::High => "2 - HIGH",
            Self::Medium => "3 - MEDIUM",
            Self::Low => "4 - LOW",
        }
    }

    /// Map a vulnerability severity to a recommendation priority.
    ///
    /// High severity escalates to critical; medium and low pass through.
    #[must_use]
    pub const fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::High => Self::Critical,
            Severity::Medium => Self::Medium,
            Severity::Low => Self::Low,
        }
    }
}

/// A single remediation recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    /// Priority driving display order
    pub priority: Priority,
    /// Display name of the category the recommendation belongs to
    pub category: String,
    /// Short imperative title
    pub title: String,
    /// One-sentence rationale
    pub description: String,
    /// Concrete next steps, in order
    pub actions: Vec<String>,
}

/// Build the prioritized remediation plan.
///
/// Category-level recommendations come first, in catalog order (the score
/// map preserves it): score < 50 emits a critical entry, score < 70 a high
/// one. Then the first [`VULNERABILITY_RECOMMENDATION_CAP`] vulnerabilities
/// (already severity-sorted) each get an entry. The concatenated list is
/// truncated to [`MAX_RECOMMENDATIONS`], so under truncation vulnerability
/// items are dropped before category items.
#[must_use]
pub fn generate_recommendations(
    scores: &IndexMap<String, CategoryScore>,
    vulnerabilities: &[Vulnerability],
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    for (key, data) in scores {
        if data.score < CRITICAL_SCORE_THRESHOLD {
            recs.push(Recommendation {
                priority: Priority::Critical,
                category: data.name.clone(),
                title: format!("Urgently improve {}", data.name),
                description: format!(
                    "Your {} score is critical ({:.0}%). It requires immediate attention.",
                    data.name, data.score
                ),
                actions: category_actions(key, Priority::Critical),
            });
        } else if data.score < HIGH_SCORE_THRESHOLD {
            recs.push(Recommendation {
                priority: Priority::High,
                category: data.name.clone(),
                title: format!("Strengthen {}", data.name),
                description: format!(
                    "Your {} score is low ({:.0}%). It requires significant improvement.",
                    data.name, data.score
                ),
                actions: category_actions(key, Priority::High),
            });
        }
    }

    for vuln in vulnerabilities.iter().take(VULNERABILITY_RECOMMENDATION_CAP) {
        recs.push(Recommendation {
            priority: Priority::from_severity(vuln.severity),
            category: vuln.category.clone(),
            title: format!("Implement: {}", strip_question_decoration(&vuln.question)),
            description: flagship_description(&vuln.question_id)
                .unwrap_or(GENERIC_DESCRIPTION)
                .to_string(),
            actions: generic_actions(),
        });
    }

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}

/// Strip question-mark decoration from a question for use as a title.
fn strip_question_decoration(text: &str) -> &str {
    text.trim()
        .trim_start_matches('¿')
        .trim_end_matches('?')
        .trim()
}

// ============================================================================
// Static knowledge base
// ============================================================================

/// Canned action list for a (category key, priority tier) pair.
///
/// Only the critical and high tiers of the built-in categories have
/// entries; any other combination yields an empty list.
fn category_actions(key: &str, tier: Priority) -> Vec<String> {
    let actions: &[&str] = match (key, tier) {
        ("technical", Priority::Critical) => &[
            "Deploy a perimeter firewall immediately",
            "Enable antivirus on every machine",
            "Configure automatic daily backups",
        ],
        ("technical", Priority::High) => &[
            "Update all software to current versions",
            "Roll out two-factor authentication",
            "Run a technical security audit",
        ],
        ("human", Priority::Critical) => &[
            "Run urgent training in basic cybersecurity",
            "Launch phishing simulation exercises",
            "Designate a security officer",
        ],
        ("human", Priority::High) => &[
            "Create a strong password policy",
            "Train staff on social engineering",
            "Set up an incident reporting channel",
        ],
        ("organizational", Priority::Critical) => &[
            "Document a company-wide security policy",
            "Implement access controls immediately",
            "Create an incident response plan",
        ],
        ("organizational", Priority::High) => &[
            "Run a compliance audit",
            "Implement user and permission management",
            "Assess the security of external vendors",
        ],
        _ => &[],
    };

    actions.iter().map(|s| (*s).to_string()).collect()
}

/// Fallback description when a question has no flagship entry
const GENERIC_DESCRIPTION: &str =
    "This practice is important for maintaining an adequate security baseline.";

/// Tailored descriptions for the flagship checks.
fn flagship_description(question_id: &str) -> Option<&'static str> {
    match question_id {
        "t4" => Some(
            "Backups are fundamental. Ransomware can destroy a business that has no backups.",
        ),
        "t9" => Some(
            "Two-factor authentication stops 99.9% of attacks that rely on a compromised password.",
        ),
        "h1" => Some(
            "95% of security breaches involve human error. Training is essential.",
        ),
        "o1" => Some(
            "A documented policy lays the foundation for your entire security strategy.",
        ),
        "o5" => Some(
            "Without a response plan, a minor incident can turn into a disaster.",
        ),
        _ => None,
    }
}

/// Generic checklist attached to every vulnerability-level recommendation.
fn generic_actions() -> Vec<String> {
    [
        "Review ISO 27001 implementation guidance",
        "Assign an owner and an implementation deadline",
        "Document the implemented process",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(name: &str, value: f32) -> CategoryScore {
        CategoryScore {
            name: name.to_string(),
            score: value,
            earned_points: 0,
            max_points: 100,
        }
    }

    fn vuln(id: &str, text: &str, severity: Severity) -> Vulnerability {
        Vulnerability {
            category: "Technical Security".to_string(),
            question_id: id.to_string(),
            question: text.to_string(),
            severity,
        }
    }

    #[test]
    fn test_category_tiers() {
        let mut scores = IndexMap::new();
        scores.insert("technical".to_string(), score("Technical Security", 30.0));
        scores.insert("human".to_string(), score("Human Factor", 60.0));
        scores.insert("organizational".to_string(), score("Org", 85.0));

        let recs = generate_recommendations(&scores, &[]);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].priority, Priority::Critical);
        assert!(recs[0].title.contains("Urgently improve"));
        assert_eq!(recs[1].priority, Priority::High);
        assert!(recs[1].title.contains("Strengthen"));
    }

    #[test]
    fn test_tier_boundaries() {
        let mut scores = IndexMap::new();
        scores.insert("technical".to_string(), score("Technical", 50.0));
        let recs = generate_recommendations(&scores, &[]);
        // Exactly 50 is high, not critical
        assert_eq!(recs[0].priority, Priority::High);

        let mut scores = IndexMap::new();
        scores.insert("technical".to_string(), score("Technical", 70.0));
        // Exactly 70 emits nothing
        assert!(generate_recommendations(&scores, &[]).is_empty());
    }

    #[test]
    fn test_category_actions_lookup() {
        let mut scores = IndexMap::new();
        scores.insert("human".to_string(), score("Human Factor", 20.0));
        let recs = generate_recommendations(&scores, &[]);
        assert_eq!(recs[0].actions.len(), 3);
        assert!(recs[0].actions[0].contains("training"));
    }

    #[test]
    fn test_unknown_category_yields_empty_actions() {
        let mut scores = IndexMap::new();
        scores.insert("physical".to_string(), score("Physical Security", 20.0));
        let recs = generate_recommendations(&scores, &[]);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].actions.is_empty());
    }

    #[test]
    fn test_severity_to_priority_mapping() {
        let vulns = vec![
            vuln("t4", "Are periodic backups taken?", Severity::High),
            vuln("t1", "Is there a firewall?", Severity::Medium),
            vuln("x1", "Minor check?", Severity::Low),
        ];
        let recs = generate_recommendations(&IndexMap::new(), &vulns);

        assert_eq!(recs[0].priority, Priority::Critical);
        assert_eq!(recs[1].priority, Priority::Medium);
        assert_eq!(recs[2].priority, Priority::Low);
    }

    #[test]
    fn test_title_strips_question_marks() {
        let vulns = vec![vuln(
            "t4",
            "¿Are periodic backups taken?",
            Severity::High,
        )];
        let recs = generate_recommendations(&IndexMap::new(), &vulns);
        assert_eq!(recs[0].title, "Implement: Are periodic backups taken");
    }

    #[test]
    fn test_flagship_description_and_fallback() {
        let vulns = vec![
            vuln("t4", "Are periodic backups taken?", Severity::High),
            vuln("t1", "Is there a firewall?", Severity::Medium),
        ];
        let recs = generate_recommendations(&IndexMap::new(), &vulns);

        assert!(recs[0].description.contains("Ransomware"));
        assert_eq!(recs[1].description, GENERIC_DESCRIPTION);
    }

    #[test]
    fn test_vulnerability_cap_of_five() {
        let vulns: Vec<_> = (0..9)
            .map(|i| vuln(&format!("q{i}"), "Check?", Severity::Low))
            .collect();
        let recs = generate_recommendations(&IndexMap::new(), &vulns);
        assert_eq!(recs.len(), VULNERABILITY_RECOMMENDATION_CAP);
    }

    #[test]
    fn test_truncation_drops_vulnerability_items_first() {
        // 4 weak categories + 5 vulnerabilities = 9 candidates, capped at 8
        let mut scores = IndexMap::new();
        for i in 0..4 {
            scores.insert(format!("c{i}"), score(&format!("Category {i}"), 10.0));
        }
        let vulns: Vec<_> = (0..5)
            .map(|i| vuln(&format!("q{i}"), "Check?", Severity::High))
            .collect();

        let recs = generate_recommendations(&scores, &vulns);
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        // All 4 category items survive; only 4 of 5 vulnerability items do
        assert!(recs[3].title.contains("Urgently improve"));
        assert!(recs[4].title.starts_with("Implement:"));
    }

    #[test]
    fn test_generic_actions_identical_for_all_vulnerabilities() {
        let vulns = vec![
            vuln("t4", "Backups?", Severity::High),
            vuln("x9", "Other?", Severity::Low),
        ];
        let recs = generate_recommendations(&IndexMap::new(), &vulns);
        assert_eq!(recs[0].actions, recs[1].actions);
        assert_eq!(recs[0].actions.len(), 3);
    }
}
