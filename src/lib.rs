//! **A library for running cybersecurity posture self-assessments.**
//!
//! `posture-tools` scores a yes/no security questionnaire, extracts the
//! vulnerabilities implied by the failed checks, and produces a prioritized
//! action plan. It powers both a command-line interface (CLI) for direct use
//! and a Rust library for programmatic integration into your own applications.
//!
//! ## Key Features
//!
//! - **Weighted Scoring**: Questions carry point values and are grouped into
//!   weighted categories (technical, human, organizational) that combine into
//!   an overall 0-100 score.
//! - **Vulnerability Extraction**: Every failed check becomes a finding with a
//!   severity derived from the question's point value.
//! - **Prioritized Recommendations**: Weak categories and individual findings
//!   are turned into a capped, ordered action plan.
//! - **Risk Classification**: The overall score maps to a Low/Medium/High/
//!   Critical risk level suitable for CI gates.
//! - **Flexible Reporting**: Reports render as JSON or as a colored terminal
//!   summary, and all types expose JSON Schemas via `schemars`.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The questionnaire data model ([`Catalog`], [`Category`],
//!   [`Question`]) and the [`AnswerSet`] respondents fill in.
//! - **[`catalog`]**: The built-in questionnaire, catalog file loading, and
//!   structural validation via the [`Validatable`] trait.
//! - **[`engine`]**: The assessment pipeline. [`evaluate`] composes scoring,
//!   vulnerability extraction, recommendation generation, and risk
//!   classification into a [`DiagnosticReport`].
//! - **[`reports`]**: Renderers that turn a [`DiagnosticReport`] into JSON or
//!   a terminal summary.
//!
//! ## Getting Started: Running an Assessment
//!
//! The most common entry point is [`evaluate`] with the built-in catalog:
//!
//! ```
//! use posture_tools::{builtin_catalog, evaluate, Answer, AnswerSet};
//!
//! let catalog = builtin_catalog();
//! let answers: AnswerSet = catalog
//!     .questions()
//!     .map(|q| (q.id.clone(), Answer::Yes))
//!     .collect();
//!
//! let report = evaluate(catalog, &answers);
//! assert_eq!(report.overall_score, 100.0);
//! assert!(report.vulnerabilities.is_empty());
//! ```
//!
//! ### Loading a Custom Catalog
//!
//! Organizations can ship their own questionnaire as YAML or JSON:
//!
//! ```no_run
//! use std::path::Path;
//! use posture_tools::{evaluate, load_catalog, AnswerSet};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = load_catalog(Path::new("catalog.yaml"))?;
//!     let answers = AnswerSet::from_path(Path::new("answers.yaml"))?;
//!     let report = evaluate(&catalog, &answers);
//!
//!     println!("Score: {:.0}% ({})", report.overall_score, report.risk_level.label());
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `posture-tools` library crate. If you are
//! looking for the command-line tool, please refer to the project's README or
//! install it via `cargo install posture-tools`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: u32↔f32 casts in scoring math are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Report render functions are inherently long
    clippy::too_many_lines
)]

pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod model;
pub mod reports;

// Re-export main types for convenience
pub use catalog::{builtin_catalog, load_catalog, CatalogIssue, Validatable};
pub use engine::{
    evaluate, extract_vulnerabilities, generate_recommendations, score_categories, CategoryScore,
    DiagnosticReport, Priority, Recommendation, RiskLevel, Severity, Vulnerability,
    MAX_RECOMMENDATIONS,
};
pub use error::{ErrorContext, OptionContext, PostureError, Result};
pub use model::{Answer, AnswerSet, Catalog, Category, Question};
pub use reports::{JsonReporter, ReportFormat, ReportMetadata, SummaryReporter};
