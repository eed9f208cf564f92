//! Application layer for Strata.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, AggregatorUpdater)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! splicing logic itself. All of that lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AggregatorReport, AggregatorUpdater, ArtifactReport, LOCK_FILE, ModuleRootSource,
    ScaffoldReport, ScaffoldRequest, ScaffoldService, StepReport, resolve_module_root,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ArtifactRenderer, Filesystem, LockGuard};

pub use error::ApplicationError;
