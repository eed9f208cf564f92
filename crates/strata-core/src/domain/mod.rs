// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Strata.
//!
//! Pure logic only: identifier derivation, artifact and aggregator
//! descriptions, and the landmark-based splicing engine. All I/O happens
//! behind the ports defined in the application layer.
//!
//! - **No I/O**: every function takes and returns text
//! - **No async**: everything here is synchronous
//! - **Stateless**: nothing is kept between invocations

pub mod aggregator;
pub mod artifact;
pub mod error;
pub mod identifiers;
pub mod splicing;

mod validation;

pub use aggregator::{Aggregator, AggregatorUpdate, EditRecord, UpdateOutcome};
pub use artifact::{ArtifactKind, Layer, RenderContext};
pub use error::{DomainError, ErrorCategory};
pub use identifiers::IdentifierSet;
pub use splicing::{Edit, EditKind, EditOutcome, InsertionPolicy, Landmark, SourceText};
pub use validation::{DomainValidator, ModelName};
