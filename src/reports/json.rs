//! JSON report generator.

use crate::engine::DiagnosticReport;
use crate::error::Result;
use chrono::Utc;
use serde::Serialize;

/// Context recorded alongside the report payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportMetadata {
    /// Name of the answers file the assessment was run against
    pub answers_file: Option<String>,
    /// Where the catalog came from ("builtin" or a file path)
    pub catalog_source: String,
    /// Total questions in the catalog
    pub question_count: usize,
    /// Questions with a recorded answer
    pub answered_count: usize,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct JsonEnvelope<'a> {
    tool: ToolInfo,
    generated_at: String,
    #[serde(flatten)]
    metadata: &'a ReportMetadata,
    report: &'a DiagnosticReport,
}

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new pretty-printing JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Emit compact single-line JSON
    #[must_use]
    pub const fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Render the report with its metadata envelope
    pub fn generate(
        &self,
        report: &DiagnosticReport,
        metadata: &ReportMetadata,
    ) -> Result<String> {
        let envelope = JsonEnvelope {
            tool: ToolInfo {
                name: "posture-tools",
                version: env!("CARGO_PKG_VERSION"),
            },
            generated_at: Utc::now().to_rfc3339(),
            metadata,
            report,
        };

        let output = if self.pretty {
            serde_json::to_string_pretty(&envelope)?
        } else {
            serde_json::to_string(&envelope)?
        };
        Ok(output)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}
