//! Questionnaire catalog data structures.
//!
//! A catalog is the static knowledge base the engine scores against:
//! weighted categories, each holding an ordered list of yes/no questions
//! with point values. Catalogs are loaded once and never mutated.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single yes/no question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Question {
    /// Identifier, unique across the whole catalog (e.g. `t4`)
    pub id: String,
    /// Question text shown to the respondent
    pub text: String,
    /// Point value; drives both scoring weight and severity tiering
    pub points: u32,
}

impl Question {
    /// Create a question
    pub fn new(id: impl Into<String>, text: impl Into<String>, points: u32) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            points,
        }
    }
}

/// A named, weighted grouping of related questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Category {
    /// Stable key used for knowledge-base lookups (e.g. `technical`)
    pub key: String,
    /// Display name
    pub name: String,
    /// Contribution to the overall score, in (0, 1]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub weight: f32,
    /// Questions in presentation order
    pub questions: Vec<Question>,
}

impl Category {
    /// Sum of point values of all questions in this category
    #[must_use]
    pub fn max_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }
}

/// The complete questionnaire catalog.
///
/// Category order is meaningful: it drives vulnerability tie-breaking and
/// the order of category-level recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Catalog {
    /// Categories in presentation order
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog from categories
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Iterate over all questions in catalog traversal order
    /// (category order, then question order within each category).
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.categories.iter().flat_map(|c| c.questions.iter())
    }

    /// Total number of questions across all categories
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    /// Look up a question by id
    #[must_use]
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions().find(|q| q.id == id)
    }

    /// Sum of category weights (1.0 for a well-formed catalog)
    #[must_use]
    pub fn weight_sum(&self) -> f32 {
        self.categories.iter().map(|c| c.weight).sum()
    }
}
