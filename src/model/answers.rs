//! Answer set: the caller-owned map of question ids to yes/no answers.
//!
//! Malformed values (anything other than "yes"/"no") are rejected here at
//! parse time. Inside the engine an absent answer counts as "no" for scoring
//! but is never flagged as a vulnerability; only an explicit [`Answer::No`]
//! is.

use crate::error::{AnswerErrorKind, PostureError, Result};
use crate::model::Catalog;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

/// Ordered map of question id to answer.
///
/// Built up one entry at a time as answers arrive; read-only input to
/// [`crate::engine::evaluate`]. Insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: IndexMap<String, Answer>,
}

impl AnswerSet {
    /// Create an empty answer set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any previous answer for the same id
    pub fn insert(&mut self, question_id: impl Into<String>, answer: Answer) {
        self.answers.insert(question_id.into(), answer);
    }

    /// Get the answer for a question, if present
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<Answer> {
        self.answers.get(question_id).copied()
    }

    /// True when the question was explicitly answered yes
    #[must_use]
    pub fn is_yes(&self, question_id: &str) -> bool {
        self.get(question_id) == Some(Answer::Yes)
    }

    /// True only when the question was explicitly answered no.
    ///
    /// Absence is NOT "no" here; the asymmetry with scoring is intentional.
    #[must_use]
    pub fn is_no(&self, question_id: &str) -> bool {
        self.get(question_id) == Some(Answer::No)
    }

    /// Number of recorded answers
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// True when no answers have been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate over `(question id, answer)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Answer)> {
        self.answers.iter().map(|(id, a)| (id.as_str(), *a))
    }

    /// Catalog question ids that have no recorded answer, in catalog order
    #[must_use]
    pub fn missing_ids(&self, catalog: &Catalog) -> Vec<String> {
        catalog
            .questions()
            .filter(|q| !self.answers.contains_key(&q.id))
            .map(|q| q.id.clone())
            .collect()
    }

    /// Recorded ids that do not correspond to any catalog question
    #[must_use]
    pub fn unknown_ids(&self, catalog: &Catalog) -> Vec<String> {
        self.answers
            .keys()
            .filter(|id| catalog.question(id).is_none())
            .cloned()
            .collect()
    }

    /// True when every catalog question has a recorded answer
    #[must_use]
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        self.missing_ids(catalog).is_empty()
    }

    /// Load an answer set from a YAML or JSON file.
    ///
    /// The format is a flat mapping of question id to `"yes"` / `"no"`.
    /// The extension selects the parser; any other value for an answer is a
    /// parse error.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PostureError::io(path, e))?;
        let display = path.display().to_string();

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => serde_yaml::from_str(&content).map_err(|e| {
                PostureError::answers(
                    format!("at {display}"),
                    AnswerErrorKind::InvalidYaml(e.to_string()),
                )
            }),
            Some("json") => serde_json::from_str(&content).map_err(|e| {
                PostureError::answers(
                    format!("at {display}"),
                    AnswerErrorKind::InvalidJson(e.to_string()),
                )
            }),
            _ => Err(PostureError::answers(
                format!("at {display}"),
                AnswerErrorKind::UnknownFormat,
            )),
        }
    }
}

impl FromIterator<(String, Answer)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (String, Answer)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// Generate a JSON Schema for the answers file format.
///
/// Useful for editor validation and autocompletion of hand-written
/// answers files.
#[must_use]
pub fn answers_schema() -> String {
    let schema = schemars::schema_for!(AnswerSet);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}
