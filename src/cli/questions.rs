//! Questions command handler.
//!
//! Prints the questionnaire catalog so users can prepare an answer file.

use crate::catalog::{builtin_catalog, load_catalog};
use crate::cli::{exit_codes, write_output, OutputTarget};
use crate::model::Catalog;
use crate::reports::ReportFormat;
use anyhow::Result;
use std::path::PathBuf;

/// Questions command configuration
pub struct QuestionsConfig {
    pub catalog_path: Option<PathBuf>,
    pub output: ReportFormat,
    pub output_file: Option<PathBuf>,
}

/// Run the questions command, returning the desired exit code.
pub fn run_questions(config: QuestionsConfig) -> Result<i32> {
    let loaded;
    let catalog = match &config.catalog_path {
        Some(path) => {
            loaded = load_catalog(path)?;
            &loaded
        }
        None => builtin_catalog(),
    };

    let output_text = match config.output {
        ReportFormat::Json => serde_json::to_string_pretty(catalog)?,
        ReportFormat::Summary => format_catalog_text(catalog),
    };

    let output_target = OutputTarget::from_option(config.output_file);
    write_output(&output_text, &output_target, false)?;

    Ok(exit_codes::SUCCESS)
}

/// Format the catalog as plain text, grouped by category
fn format_catalog_text(catalog: &Catalog) -> String {
    let mut lines = Vec::new();

    for category in &catalog.categories {
        lines.push(format!(
            "{} (weight {:.0}%, {} points)",
            category.name,
            category.weight * 100.0,
            category.max_points()
        ));
        for question in &category.questions {
            lines.push(format!(
                "  {:<4} [{:>2} pts] {}",
                question.id, question.points, question.text
            ));
        }
        lines.push(String::new());
    }
    lines.push("Answer each question id with 'yes' or 'no' in a YAML or JSON file.".to_string());

    lines.join("\n")
}
