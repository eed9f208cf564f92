// ============================================================================
// domain/error.rs - STRUCTURAL AND INPUT ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep a copy)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid model name '{name}': {reason}")]
    InvalidModelName { name: String, reason: String },

    #[error("Invalid module root '{module}': {reason}")]
    InvalidModuleRoot { module: String, reason: String },

    // ========================================================================
    // Structural Errors (aggregator file does not match the expected shape)
    // ========================================================================
    #[error("line {line} matched '{landmark}' but does not open a block")]
    NotABlockOpener { landmark: String, line: usize },

    #[error("block opened at line {line} by '{landmark}' is never closed")]
    UnterminatedBlock { landmark: String, line: usize },

    #[error("block opened by '{landmark}' closes on line {line}, which is not a bare '}}'")]
    BlockClosesInline { landmark: String, line: usize },

    #[error("argument list of '{call}' is never closed")]
    UnterminatedCall { call: String },

    #[error("line index {index} is out of bounds for a text of {len} lines")]
    LineOutOfBounds { index: usize, len: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidModelName { name, reason } => vec![
                format!("'{}' cannot be used: {}", name, reason),
                "Use a single identifier such as: order, userProfile, Invoice".into(),
            ],
            Self::InvalidModuleRoot { .. } => vec![
                "Pass the Go module path explicitly with --module".into(),
                "Or run strata from the project root so go.mod can be read".into(),
            ],
            Self::NotABlockOpener { landmark, .. }
            | Self::UnterminatedBlock { landmark, .. }
            | Self::BlockClosesInline { landmark, .. } => vec![
                format!("The block introduced by '{}' has an unexpected shape", landmark),
                "Run gofmt on the file and put the closing brace on its own line".into(),
                "The file was left untouched".into(),
            ],
            Self::UnterminatedCall { call } => vec![
                format!("Could not find the closing parenthesis of '{}'", call),
                "The file was left untouched".into(),
            ],
            Self::LineOutOfBounds { .. } => vec!["This is a bug, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidModelName { .. } | Self::InvalidModuleRoot { .. } => {
                ErrorCategory::Validation
            }
            Self::NotABlockOpener { .. }
            | Self::UnterminatedBlock { .. }
            | Self::BlockClosesInline { .. }
            | Self::UnterminatedCall { .. } => ErrorCategory::Structure,
            Self::LineOutOfBounds { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Structure,
    Internal,
}
