//! Catalog loading, validation, and the built-in questionnaire.
//!
//! The built-in catalog covers three weighted areas of an organization's
//! security posture: technical controls, the human factor, and
//! organizational management. A custom catalog can be loaded from a YAML or
//! JSON file; file catalogs are validated at load time so that malformed
//! configuration is a load error, never a runtime failure inside the engine.

mod builtin;
mod file;
mod validation;

pub use builtin::builtin_catalog;
pub use file::load_catalog;
pub use validation::{CatalogIssue, Validatable, WEIGHT_SUM_TOLERANCE};
