//! CLI command handlers.
//!
//! Each subcommand lives in its own module and returns an exit code
//! that `main` forwards to the process.

mod assess;
mod output;
mod questions;

pub use assess::{run_assess, AssessConfig};
pub use output::{should_use_color, write_output, OutputTarget};
pub use questions::{run_questions, QuestionsConfig};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Overall score fell below the requested minimum
    pub const BELOW_THRESHOLD: i32 = 1;
    /// Risk level is critical and --fail-on-critical was set
    pub const CRITICAL_RISK: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
