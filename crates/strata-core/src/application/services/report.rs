//! What a scaffold run did, for display and `--output-format json`.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{
    Aggregator, ArtifactKind, EditOutcome, EditRecord, IdentifierSet, Layer, UpdateOutcome,
};

#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub model: IdentifierSet,
    pub module_root: String,
    pub dry_run: bool,
    pub steps: Vec<StepReport>,
}

impl ScaffoldReport {
    /// One human-readable line per skipped edit.
    pub fn warnings(&self) -> Vec<String> {
        self.steps
            .iter()
            .filter_map(|step| step.aggregator.as_ref())
            .flat_map(|agg| {
                agg.edits
                    .iter()
                    .filter(|e| e.outcome == EditOutcome::LandmarkMissing)
                    .map(move |e| {
                        format!(
                            "{}: landmark '{}' not found, add manually: {}",
                            agg.path.display(),
                            e.landmark,
                            e.line
                        )
                    })
            })
            .collect()
    }

    /// Every file created or modified (or that would be, on a dry run).
    pub fn touched_files(&self) -> Vec<&PathBuf> {
        self.steps
            .iter()
            .flat_map(|step| {
                step.artifacts.iter().map(|a| &a.path).chain(
                    step.aggregator
                        .iter()
                        .filter(|agg| agg.changed)
                        .map(|agg| &agg.path),
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub layer: Layer,
    pub artifacts: Vec<ArtifactReport>,
    pub aggregator: Option<AggregatorReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtifactReport {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    /// An existing file was overwritten.
    pub replaced: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregatorReport {
    pub aggregator: Aggregator,
    pub path: PathBuf,
    pub outcome: UpdateOutcome,
    /// The new content differs from the file on disk.
    pub changed: bool,
    pub edits: Vec<EditRecord>,
}
