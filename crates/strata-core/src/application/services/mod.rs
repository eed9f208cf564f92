//! Application services (use case orchestration).

pub mod aggregator_updater;
pub mod module_root;
pub mod report;
pub mod scaffold_service;

pub use aggregator_updater::AggregatorUpdater;
pub use module_root::{ModuleRootSource, parse_module_directive, resolve_module_root};
pub use report::{AggregatorReport, ArtifactReport, ScaffoldReport, StepReport};
pub use scaffold_service::{LOCK_FILE, ScaffoldRequest, ScaffoldService};
