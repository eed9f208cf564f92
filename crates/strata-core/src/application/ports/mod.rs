//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `strata-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations and the project lock
//!   - `ArtifactRenderer`: Source text for new artifacts
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ArtifactRenderer, Filesystem, LockGuard};

#[cfg(test)]
pub use output::{MockArtifactRenderer, MockFilesystem};
