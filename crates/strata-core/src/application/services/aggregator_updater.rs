//! Read, edit and write back one aggregator file.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::application::ApplicationError;
use crate::application::ports::Filesystem;
use crate::application::services::report::AggregatorReport;
use crate::domain::{Aggregator, IdentifierSet};
use crate::error::StrataResult;

pub struct AggregatorUpdater<'a> {
    filesystem: &'a dyn Filesystem,
    project_root: &'a Path,
}

impl<'a> AggregatorUpdater<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, project_root: &'a Path) -> Self {
        Self {
            filesystem,
            project_root,
        }
    }

    /// Apply every missing edit for `ids` to `aggregator`'s file.
    ///
    /// The file is written once, and only when its content changed. With
    /// `dry_run` nothing is written but the report is identical.
    #[instrument(skip_all, fields(aggregator = %aggregator, model = ids.raw()))]
    pub fn update(
        &self,
        aggregator: Aggregator,
        ids: &IdentifierSet,
        module_root: &str,
        dry_run: bool,
    ) -> StrataResult<AggregatorReport> {
        let relative = aggregator.relative_path();
        let path = self.project_root.join(&relative);
        if !self.filesystem.exists(&path) {
            return Err(ApplicationError::AggregatorNotFound { path }.into());
        }

        let original = self.filesystem.read_file(&path)?;
        let update = aggregator
            .update(&original, ids, module_root)
            .map_err(|source| ApplicationError::MalformedAggregator {
                path: path.clone(),
                source,
            })?;

        for skipped in update.missing_landmarks() {
            warn!(
                file = %relative.display(),
                landmark = %skipped.landmark,
                line = %skipped.line,
                "Landmark not found; add the line manually"
            );
        }

        if update.changed && !dry_run {
            self.filesystem.write_file(&path, &update.content)?;
            info!(file = %relative.display(), "Aggregator updated");
        } else {
            debug!(file = %relative.display(), changed = update.changed, "Aggregator not written");
        }

        Ok(AggregatorReport {
            aggregator,
            path: relative,
            outcome: update.outcome,
            changed: update.changed,
            edits: update.edits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::UpdateOutcome;
    use crate::error::{ErrorCategory, StrataError};
    use mockall::predicate::{always, eq};
    use std::path::PathBuf;

    const HANDLERS: &str = "import (\n)\n\ntype Handlers struct {\n}\n\nfunc NewHandlers() *Handlers {\n\treturn &Handlers{}\n}\n\nfunc (h *Handlers) Configure(server *fiber.App) {\n}\n";

    fn handlers_path() -> PathBuf {
        PathBuf::from("/p/internal/app/adapter/handlers.go")
    }

    #[test]
    fn writes_changed_file_once() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_file()
            .with(eq(handlers_path()))
            .returning(|_| Ok(HANDLERS.to_string()));
        fs.expect_write_file()
            .with(eq(handlers_path()), always())
            .times(1)
            .returning(|_, _| Ok(()));

        let report = AggregatorUpdater::new(&fs, Path::new("/p"))
            .update(Aggregator::HandlerRegistry, &IdentifierSet::derive("order"), "shop", false)
            .unwrap();
        assert_eq!(report.outcome, UpdateOutcome::Updated);
        assert_eq!(report.path, PathBuf::from("internal/app/adapter/handlers.go"));
    }

    #[test]
    fn dry_run_never_writes() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_file().returning(|_| Ok(HANDLERS.to_string()));
        fs.expect_write_file().never();

        let report = AggregatorUpdater::new(&fs, Path::new("/p"))
            .update(Aggregator::HandlerRegistry, &IdentifierSet::derive("order"), "shop", true)
            .unwrap();
        assert!(report.changed);
    }

    #[test]
    fn unchanged_file_is_not_rewritten() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_file()
            .returning(|_| Ok("package adapters\n".to_string()));
        fs.expect_write_file().never();

        let report = AggregatorUpdater::new(&fs, Path::new("/p"))
            .update(Aggregator::HandlerRegistry, &IdentifierSet::derive("order"), "shop", false)
            .unwrap();
        assert_eq!(report.outcome, UpdateOutcome::LandmarkMissing);
    }

    #[test]
    fn malformed_file_is_left_alone() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_file()
            .returning(|_| Ok("type Handlers struct {\n\treturn &Handlers{\n".to_string()));
        fs.expect_write_file().never();

        let err = AggregatorUpdater::new(&fs, Path::new("/p"))
            .update(Aggregator::HandlerRegistry, &IdentifierSet::derive("order"), "shop", false)
            .unwrap_err();
        assert!(matches!(
            err,
            StrataError::Application(ApplicationError::MalformedAggregator { .. })
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);

        let err = AggregatorUpdater::new(&fs, Path::new("/p"))
            .update(Aggregator::MigrationList, &IdentifierSet::derive("order"), "shop", false)
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
