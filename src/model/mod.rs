//! Core data structures for posture assessment.

mod answers;
mod catalog;

pub use answers::{Answer, AnswerSet, answers_schema};
pub use catalog::{Catalog, Category, Question};
