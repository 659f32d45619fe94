//! posture-tools: Cybersecurity posture self-assessment tool
//!
//! Scores a yes/no security questionnaire and produces a prioritized
//! remediation plan.

#![allow(clippy::too_many_lines, clippy::struct_excessive_bools)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use posture_tools::{
    cli::{self, AssessConfig, QuestionsConfig},
    engine::report_schema,
    model::answers_schema,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with catalog info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nBuilt-in Catalog:",
        "\n  technical (40%), human (30%), organizational (30%)",
        "\n  23 yes/no questions",
        "\n\nOutput Formats:",
        "\n  summary, json"
    )
}

#[derive(Parser)]
#[command(name = "posture-tools")]
#[command(version, long_version = build_long_version())]
#[command(about = "Cybersecurity posture self-assessment tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Assessment completed
    1  Overall score below --min-score
    2  Critical risk level (with --fail-on-critical)
    3  Error occurred

EXAMPLES:
    # List the questionnaire, then fill in answers.yaml
    posture-tools questions > questionnaire.txt

    # Run an assessment with terminal output
    posture-tools assess answers.yaml

    # CI/CD gate: require a score of at least 60
    posture-tools assess answers.yaml -o json --min-score 60

    # Use a custom catalog
    posture-tools assess answers.yaml --catalog policy/catalog.yaml")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `assess` subcommand
#[derive(Parser)]
struct AssessArgs {
    /// Path to the answers file (YAML or JSON, question id -> yes/no)
    answers: PathBuf,

    /// Path to a custom catalog file (uses the built-in catalog if omitted)
    #[arg(long, env = "POSTURE_TOOLS_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if the overall score is below this threshold
    #[arg(long)]
    min_score: Option<f32>,

    /// Exit with code 2 if the risk level is critical
    #[arg(long)]
    fail_on_critical: bool,

    /// Score unanswered questions as 'no' instead of failing
    #[arg(long)]
    allow_partial: bool,
}

/// Arguments for the `questions` subcommand
#[derive(Parser)]
struct QuestionsArgs {
    /// Path to a custom catalog file (uses the built-in catalog if omitted)
    #[arg(long, env = "POSTURE_TOOLS_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Which JSON Schema to emit
#[derive(Clone, Copy, ValueEnum)]
enum SchemaKind {
    /// Schema for the diagnostic report
    Report,
    /// Schema for the answers file
    Answers,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a posture assessment against an answers file
    Assess(AssessArgs),

    /// Print the questionnaire catalog
    Questions(QuestionsArgs),

    /// Generate JSON Schema for the report or answers file format
    Schema {
        /// Which schema to emit
        #[arg(value_enum, default_value = "report")]
        kind: SchemaKind,

        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(cli::exit_codes::ERROR);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Assess(args) => {
            let config = AssessConfig {
                answers_path: args.answers,
                catalog_path: args.catalog,
                output: args.output,
                output_file: args.output_file,
                min_score: args.min_score,
                fail_on_critical: args.fail_on_critical,
                allow_partial: args.allow_partial,
                no_color: cli.no_color,
            };
            let exit_code = cli::run_assess(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Questions(args) => {
            let config = QuestionsConfig {
                catalog_path: args.catalog,
                output: args.output,
                output_file: args.output_file,
            };
            let exit_code = cli::run_questions(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Schema { kind, output } => {
            let schema = match kind {
                SchemaKind::Report => report_schema(),
                SchemaKind::Answers => answers_schema(),
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "posture-tools", &mut io::stdout());
            Ok(())
        }
    }
}
