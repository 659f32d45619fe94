//! Assess command handler.
//!
//! Implements the `assess` subcommand for running a posture diagnostic
//! against an answer file.

use crate::catalog::{builtin_catalog, load_catalog};
use crate::cli::{exit_codes, should_use_color, write_output, OutputTarget};
use crate::engine::evaluate;
use crate::model::AnswerSet;
use crate::reports::{JsonReporter, ReportFormat, ReportMetadata, SummaryReporter};
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Assess command configuration
pub struct AssessConfig {
    pub answers_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub output: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub min_score: Option<f32>,
    pub fail_on_critical: bool,
    pub allow_partial: bool,
    pub no_color: bool,
}

/// Run the assess command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_assess(config: AssessConfig) -> Result<i32> {
    let loaded;
    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!("Loading catalog from {:?}", path);
            loaded = load_catalog(path)?;
            &loaded
        }
        None => builtin_catalog(),
    };

    let answers = AnswerSet::from_path(&config.answers_path)?;
    tracing::info!(
        "Loaded {} answers for {} questions",
        answers.len(),
        catalog.question_count()
    );

    let unknown = answers.unknown_ids(catalog);
    if !unknown.is_empty() {
        tracing::warn!("Ignoring answers for unknown question ids: {}", unknown.join(", "));
    }

    let missing = answers.missing_ids(catalog);
    if !missing.is_empty() {
        if config.allow_partial {
            tracing::warn!(
                "{} questions unanswered, counting them as 'no': {}",
                missing.len(),
                missing.join(", ")
            );
        } else {
            bail!(
                "Questionnaire incomplete: {} of {} questions unanswered ({}). \
                 Pass --allow-partial to score missing answers as 'no'.",
                missing.len(),
                catalog.question_count(),
                missing.join(", ")
            );
        }
    }

    let report = evaluate(catalog, &answers);

    let output_text = match config.output {
        ReportFormat::Json => {
            let metadata = ReportMetadata {
                answers_file: Some(config.answers_path.display().to_string()),
                catalog_source: config
                    .catalog_path
                    .as_ref()
                    .map_or_else(|| "builtin".to_string(), |p| p.display().to_string()),
                question_count: catalog.question_count(),
                answered_count: answers.len(),
            };
            JsonReporter::new().generate(&report, &metadata)?
        }
        ReportFormat::Summary => {
            let reporter = if should_use_color(config.no_color) {
                SummaryReporter::new()
            } else {
                SummaryReporter::new().no_color()
            };
            reporter.generate(&report)
        }
    };

    let output_target = OutputTarget::from_option(config.output_file);
    write_output(&output_text, &output_target, false)?;

    if config.fail_on_critical && report.risk_level.is_critical() {
        tracing::error!("Risk level is critical");
        return Ok(exit_codes::CRITICAL_RISK);
    }

    // Check minimum score threshold
    if let Some(threshold) = config.min_score {
        if report.overall_score < threshold {
            tracing::error!(
                "Overall score {:.1} is below minimum threshold {:.1}",
                report.overall_score,
                threshold
            );
            return Ok(exit_codes::BELOW_THRESHOLD);
        }
    }

    Ok(exit_codes::SUCCESS)
}
