//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;
use crate::error::{ErrorCategory, StrataError};

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Artifact rendering failed.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An aggregator file the step needs is not in the project.
    #[error("Aggregator file not found: {path}")]
    AggregatorNotFound { path: PathBuf },

    /// Another run holds the project lock, or it could not be taken.
    #[error("Could not lock {path}: {reason}")]
    LockFailed { path: PathBuf, reason: String },

    /// An aggregator file does not have the expected shape.
    #[error("Malformed aggregator {path}: {source}")]
    MalformedAggregator {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    /// One step of a multi-step run failed. Earlier steps stay on disk.
    #[error("Step '{step}' failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: Box<StrataError>,
    },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Run strata from the root of the Go project, or pass --project-dir".into(),
            ],
            Self::AggregatorNotFound { path } => vec![
                format!("Expected {} to exist", path.display()),
                "Run strata from the root of a project created from the Fiber template".into(),
                "Or pass the project root with --project-dir".into(),
            ],
            Self::LockFailed { path, .. } => vec![
                format!("Another strata run may be in progress ({})", path.display()),
                "Try again in a moment".into(),
            ],
            Self::MalformedAggregator { path, source } => {
                let mut s = vec![format!("Check the layout of {}", path.display())];
                s.extend(source.suggestions());
                s
            }
            Self::StepFailed { step, source } => {
                let mut s = vec![format!(
                    "Files written before the '{}' step were kept",
                    step
                )];
                s.extend(source.suggestions());
                s
            }
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::LockFailed { .. } => ErrorCategory::Internal,
            Self::AggregatorNotFound { .. } => ErrorCategory::NotFound,
            Self::MalformedAggregator { .. } => ErrorCategory::Structure,
            Self::StepFailed { source, .. } => source.category(),
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}
