//! Property-based tests for the assessment engine.
//!
//! Ensures the engine handles arbitrary answer sets without panicking,
//! and that scoring and plan invariants hold across random inputs.

use posture_tools::{
    builtin_catalog, evaluate, Answer, AnswerSet, Priority, MAX_RECOMMENDATIONS,
};
use proptest::prelude::*;

/// Random subset of builtin question ids with random answers.
fn arb_answers() -> impl Strategy<Value = AnswerSet> {
    let ids: Vec<String> = builtin_catalog()
        .questions()
        .map(|q| q.id.clone())
        .collect();
    proptest::collection::vec(any::<Option<bool>>(), ids.len()).prop_map(move |choices| {
        ids.iter()
            .zip(choices)
            .filter_map(|(id, choice)| {
                choice.map(|yes| (id.clone(), if yes { Answer::Yes } else { Answer::No }))
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn score_is_bounded(answers in arb_answers()) {
        let report = evaluate(builtin_catalog(), &answers);
        prop_assert!(report.overall_score >= 0.0);
        prop_assert!(report.overall_score <= 100.0);
        for score in report.category_scores.values() {
            prop_assert!(score.score >= 0.0 && score.score <= 100.0);
            prop_assert!(score.earned_points <= score.max_points);
        }
    }

    #[test]
    fn vulnerabilities_sorted_by_severity(answers in arb_answers()) {
        let report = evaluate(builtin_catalog(), &answers);
        for pair in report.vulnerabilities.windows(2) {
            prop_assert!(pair[0].severity.rank() >= pair[1].severity.rank());
        }
    }

    #[test]
    fn only_explicit_no_becomes_vulnerability(answers in arb_answers()) {
        let report = evaluate(builtin_catalog(), &answers);
        let explicit_no = builtin_catalog()
            .questions()
            .filter(|q| answers.is_no(&q.id))
            .count();
        prop_assert_eq!(report.vulnerabilities.len(), explicit_no);
    }

    #[test]
    fn plan_is_capped(answers in arb_answers()) {
        let report = evaluate(builtin_catalog(), &answers);
        prop_assert!(report.recommendations.len() <= MAX_RECOMMENDATIONS);
    }

    #[test]
    fn category_entries_precede_finding_entries(answers in arb_answers()) {
        let report = evaluate(builtin_catalog(), &answers);
        // Category-level entries all carry "improve"/"Strengthen" titles and
        // come as a prefix of the plan.
        let first_finding = report
            .recommendations
            .iter()
            .position(|r| r.title.starts_with("Implement:"));
        if let Some(pos) = first_finding {
            for rec in &report.recommendations[pos..] {
                prop_assert!(rec.title.starts_with("Implement:"));
            }
        }
    }

    #[test]
    fn evaluation_is_deterministic(answers in arb_answers()) {
        let a = evaluate(builtin_catalog(), &answers);
        let b = evaluate(builtin_catalog(), &answers);
        prop_assert_eq!(a.overall_score, b.overall_score);
        prop_assert_eq!(a.vulnerabilities, b.vulnerabilities);
        prop_assert_eq!(a.recommendations, b.recommendations);
        prop_assert_eq!(a.risk_level, b.risk_level);
    }

    #[test]
    fn risk_level_matches_score_bands(answers in arb_answers()) {
        use posture_tools::RiskLevel;
        let report = evaluate(builtin_catalog(), &answers);
        let expected = if report.overall_score >= 80.0 {
            RiskLevel::Low
        } else if report.overall_score >= 60.0 {
            RiskLevel::Medium
        } else if report.overall_score >= 40.0 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        };
        prop_assert_eq!(report.risk_level, expected);
    }

    #[test]
    fn category_entries_use_category_tiers(answers in arb_answers()) {
        let report = evaluate(builtin_catalog(), &answers);
        // Category-level entries only carry the two category tiers
        let category_prefix: Vec<Priority> = report
            .recommendations
            .iter()
            .take_while(|r| !r.title.starts_with("Implement:"))
            .map(|r| r.priority)
            .collect();
        prop_assert!(category_prefix
            .iter()
            .all(|p| matches!(p, Priority::Critical | Priority::High)));
    }
}
