//! Weighted category scoring.

use super::report::CategoryScore;
use crate::model::{AnswerSet, Catalog};
use indexmap::IndexMap;

/// Score every category and compute the weighted overall score.
///
/// For each category: earned points are the sum of point values of
/// questions explicitly answered yes; maximum points are the sum across all
/// of the category's questions. Questions with no answer or an explicit
/// "no" contribute nothing to earned points but still count toward the
/// maximum; absence is "no" for scoring purposes.
///
/// The overall score is Σ(category percentage × category weight). With
/// weights summing to 1.0 it lands in [0, 100]; it is clamped to 100
/// against weight rounding.
#[must_use]
pub fn score_categories(
    catalog: &Catalog,
    answers: &AnswerSet,
) -> (IndexMap<String, CategoryScore>, f32) {
    let mut scores = IndexMap::with_capacity(catalog.categories.len());
    let mut overall = 0.0_f32;

    for category in &catalog.categories {
        let max_points: u32 = category.questions.iter().map(|q| q.points).sum();
        let earned_points: u32 = category
            .questions
            .iter()
            .filter(|q| answers.is_yes(&q.id))
            .map(|q| q.points)
            .sum();

        // Validated catalogs have max_points > 0 in every category
        let percentage = if max_points > 0 {
            earned_points as f32 / max_points as f32 * 100.0
        } else {
            0.0
        };

        overall += percentage * category.weight;

        scores.insert(
            category.key.clone(),
            CategoryScore {
                name: category.name.clone(),
                score: percentage,
                earned_points,
                max_points,
            },
        );
    }

    (scores, overall.min(100.0))
}
