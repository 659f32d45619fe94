//! Report rendering for diagnostic results.
//!
//! Two output formats:
//! - JSON: structured data for programmatic integration
//! - Summary: compact, colored shell output for terminal usage

mod json;
mod summary;

pub use json::{JsonReporter, ReportMetadata};
pub use summary::SummaryReporter;

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for diagnostic reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
pub enum ReportFormat {
    /// Brief, colored terminal summary
    #[default]
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display() {
        assert_eq!(ReportFormat::Summary.to_string(), "summary");
        assert_eq!(ReportFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_default_format() {
        assert_eq!(ReportFormat::default(), ReportFormat::Summary);
    }
}
