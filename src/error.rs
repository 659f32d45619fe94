//! Unified error types for posture-tools.
//!
//! The assessment engine itself is infallible: every error in this crate
//! arises at the boundary: loading a catalog, parsing an answers file,
//! serializing a report, or touching the filesystem.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for posture-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PostureError {
    /// Errors while loading or validating a questionnaire catalog
    #[error("Failed to load catalog: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Errors while loading an answers file
    #[error("Failed to load answers: {context}")]
    Answers {
        context: String,
        #[source]
        source: AnswerErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific catalog error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Unknown catalog file format - expected a .yaml, .yml or .json file")]
    UnknownFormat,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Catalog failed validation: {0}")]
    Invalid(String),
}

/// Specific answers error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnswerErrorKind {
    #[error("Unknown answers file format - expected a .yaml, .yml or .json file")]
    UnknownFormat,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Schema generation failed: {0}")]
    SchemaError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for posture-tools operations
pub type Result<T> = std::result::Result<T, PostureError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl PostureError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create an answers error with context
    pub fn answers(context: impl Into<String>, source: AnswerErrorKind) -> Self {
        Self::Answers {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for PostureError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for PostureError {
    fn from(err: serde_json::Error) -> Self {
        Self::report(
            "JSON serialization",
            ReportErrorKind::JsonSerializationError(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    ///
    /// The closure is only called if the result is an error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<PostureError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: PostureError, new_ctx: &str) -> PostureError {
    match err {
        PostureError::Catalog {
            context: existing,
            source,
        } => PostureError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PostureError::Answers {
            context: existing,
            source,
        } => PostureError::Answers {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PostureError::Report {
            context: existing,
            source,
        } => PostureError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PostureError::Io {
            path,
            message,
            source,
        } => PostureError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        PostureError::Config(msg) => PostureError::Config(chain_context(new_ctx, &msg)),
        PostureError::Validation(msg) => PostureError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| PostureError::Validation(context.into()))
    }
}
