//! Strata Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Strata, a
//! scaffolding tool that generates CRUD layers for Go Fiber + GORM projects
//! and wires them into the project's hand-maintained aggregator files.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           strata-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, AggregatorUpdater)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Filesystem, ArtifactRenderer)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     strata-adapters (Infrastructure)    │
//! │ (LocalFilesystem, FiberGormRenderer..)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (IdentifierSet, Aggregator, splicing)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use strata_core::prelude::*;
//!
//! let service = ScaffoldService::new(renderer, filesystem, "./my-api");
//! let report = service.scaffold(ScaffoldRequest {
//!     name: ModelName::parse("order")?,
//!     module_root: "github.com/acme/shop".into(),
//!     layers: Layer::PIPELINE.to_vec(),
//!     dry_run: false,
//! })?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldRequest, ScaffoldService,
        ports::{ArtifactRenderer, Filesystem, LockGuard},
    };
    pub use crate::domain::{
        Aggregator, ArtifactKind, IdentifierSet, Layer, ModelName, RenderContext, SourceText,
        UpdateOutcome,
    };
    pub use crate::error::{StrataError, StrataResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
