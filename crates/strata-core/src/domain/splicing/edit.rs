use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::error::DomainError;
use crate::domain::splicing::landmark::{InsertionPolicy, Landmark};
use crate::domain::splicing::splice::{splice_after, splice_before_close, splice_block_start};
use crate::domain::splicing::text::SourceText;

/// What an edit adds to an aggregator file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    Import,
    Field,
    ConstructorEntry,
    DispatchCall,
    MigrationEntry,
}

/// A single line to insert relative to a landmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edit {
    kind: EditKind,
    landmark: Landmark,
    line: String,
}

impl Edit {
    pub fn new(kind: EditKind, landmark: Landmark, line: impl Into<String>) -> Self {
        Self {
            kind,
            landmark,
            line: line.into(),
        }
    }

    pub fn kind(&self) -> EditKind {
        self.kind
    }

    pub fn landmark(&self) -> &Landmark {
        &self.landmark
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOutcome {
    Applied,
    AlreadyPresent,
    LandmarkMissing,
}

/// Apply `edits` in order as one in-memory transformation.
///
/// Presence is checked against the text as it was *before* this call, so an
/// edit never matches a line another edit of the same batch just added.
/// Consecutive `AfterLine` edits sharing a landmark keep their relative
/// order. An `AfterLine` landmark ending in `{` inserts into the block it
/// opens, splitting a same-line `{}` first. On a structural error `text` may be partially edited; callers
/// discard it.
pub fn apply_edits(text: &mut SourceText, edits: &[Edit]) -> Result<Vec<EditOutcome>, DomainError> {
    let original = text.clone();
    let mut inserted_after: HashMap<&str, usize> = HashMap::new();
    let mut outcomes = Vec::with_capacity(edits.len());

    for edit in edits {
        if original.contains_line(&edit.line) {
            debug!(kind = ?edit.kind, line = %edit.line.trim(), "Already present");
            outcomes.push(EditOutcome::AlreadyPresent);
            continue;
        }

        let needle = edit.landmark.needle();
        let Some(index) = edit.landmark.locate(text.lines()) else {
            warn!(kind = ?edit.kind, landmark = needle, "Landmark not found, edit skipped");
            outcomes.push(EditOutcome::LandmarkMissing);
            continue;
        };

        match edit.landmark.policy() {
            InsertionPolicy::AfterLine => {
                let already = inserted_after.entry(needle).or_insert(0);
                if *already == 0 && needle.trim_end().ends_with('{') {
                    splice_block_start(text, index, &edit.line, needle)?;
                } else {
                    splice_after(text, index + *already, &edit.line)?;
                }
                *already += 1;
            }
            InsertionPolicy::BeforeBlockClose => {
                splice_before_close(text, index, &edit.line, needle)?;
            }
        }
        debug!(kind = ?edit.kind, line = %edit.line.trim(), "Applied");
        outcomes.push(EditOutcome::Applied);
    }

    Ok(outcomes)
}
