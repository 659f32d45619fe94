//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable diagnostic for terminal usage:
//! overall score and risk badge, per-category breakdown, detected
//! vulnerabilities, the prioritized action plan, and an executive summary.

use crate::engine::{DiagnosticReport, Priority, RiskLevel, Severity};

/// How many vulnerabilities the summary view lists (the report keeps all)
const VULNERABILITY_DISPLAY_CAP: usize = 10;

/// Width of the per-category score bar
const BAR_WIDTH: usize = 20;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn risk_color(level: RiskLevel) -> &'static str {
        match level {
            RiskLevel::Low => "green",
            RiskLevel::Medium => "yellow",
            RiskLevel::High | RiskLevel::Critical => "red",
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::High => "red",
            Severity::Medium => "yellow",
            Severity::Low => "dim",
        }
    }

    fn priority_color(priority: Priority) -> &'static str {
        match priority {
            Priority::Critical => "red",
            Priority::High => "yellow",
            Priority::Medium | Priority::Low => "cyan",
        }
    }

    /// Render the diagnostic summary
    #[must_use]
    pub fn generate(&self, report: &DiagnosticReport) -> String {
        let mut lines = Vec::new();

        // Header
        lines.push(self.color("Security Posture Diagnostic", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {}",
            self.color("Date:", "cyan"),
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        lines.push(String::new());

        // Overall score and risk badge
        lines.push(format!(
            "{} {:.0}%   {}",
            self.color("Overall Score:", "cyan"),
            report.overall_score,
            self.color(
                &format!("Risk: {}", report.risk_level.label()),
                Self::risk_color(report.risk_level),
            )
        ));
        lines.push(self.color(report.risk_level.description(), "dim"));
        lines.push(String::new());

        // Category breakdown
        lines.push(self.color("Category Breakdown", "bold"));
        for score in report.category_scores.values() {
            let filled = ((score.score / 100.0) * BAR_WIDTH as f32).round() as usize;
            let filled = filled.min(BAR_WIDTH);
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
            lines.push(format!(
                "  {:<28} {} {:>3.0}%  ({} of {} points)",
                score.name, bar, score.score, score.earned_points, score.max_points
            ));
        }
        lines.push(String::new());

        // Vulnerabilities
        lines.push(self.color(
            &format!(
                "Detected Vulnerabilities ({})",
                report.vulnerabilities.len()
            ),
            "bold",
        ));
        if report.vulnerabilities.is_empty() {
            lines.push(self.color("  No failed checks.", "green"));
        }
        for vuln in report.vulnerabilities.iter().take(VULNERABILITY_DISPLAY_CAP) {
            lines.push(format!(
                "  {} {} {}",
                self.color(
                    &format!("[{}]", vuln.severity.badge()),
                    Self::severity_color(vuln.severity)
                ),
                self.color(&vuln.category, "dim"),
                vuln.question
            ));
        }
        let hidden = report
            .vulnerabilities
            .len()
            .saturating_sub(VULNERABILITY_DISPLAY_CAP);
        if hidden > 0 {
            lines.push(self.color(&format!("  ... and {hidden} more"), "dim"));
        }
        lines.push(String::new());

        // Action plan
        lines.push(self.color("Recommended Action Plan", "bold"));
        if report.recommendations.is_empty() {
            lines.push(self.color("  Nothing to do. Keep it up.", "green"));
        }
        for rec in &report.recommendations {
            lines.push(format!(
                "  {} {} {}",
                self.color(
                    &format!("[Priority {}]", rec.priority.label()),
                    Self::priority_color(rec.priority)
                ),
                self.color(&rec.category, "dim"),
                rec.title
            ));
            lines.push(format!("      {}", rec.description));
            for action in &rec.actions {
                lines.push(format!("      • {action}"));
            }
        }
        lines.push(String::new());

        // Executive summary
        lines.push(self.color("Executive Summary", "bold"));
        lines.push(format!(
            "  Current state: {} risk posture.",
            report.risk_level.label().to_uppercase()
        ));
        lines.push(format!(
            "  Critical vulnerabilities: {} requiring immediate attention.",
            report.high_severity_count()
        ));
        lines.push(format!(
            "  Areas to reinforce: {} of {} categories score below 70%.",
            report.categories_below(70.0),
            report.category_scores.len()
        ));
        lines.push(format!(
            "  Next steps: implement the {} prioritized recommendations within 30-90 days.",
            report.recommendations.len()
        ));

        lines.join("\n")
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}
