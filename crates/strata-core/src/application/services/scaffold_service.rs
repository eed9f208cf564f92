//! Scaffold Service - main application orchestrator.
//!
//! For every requested layer, in order:
//! 1. Render the layer's artifacts and write them (overwriting silently)
//! 2. Wire the new artifacts into the layer's aggregator file
//!
//! The whole run holds the project lock.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{ArtifactRenderer, Filesystem},
        services::{
            aggregator_updater::AggregatorUpdater,
            report::{ArtifactReport, ScaffoldReport, StepReport},
        },
    },
    domain::{DomainValidator as validator, IdentifierSet, Layer, ModelName},
    error::{StrataError, StrataResult},
};

/// Name of the lock file created at the project root.
pub const LOCK_FILE: &str = ".strata.lock";

/// Input to one scaffold run.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub name: ModelName,
    pub module_root: String,
    pub layers: Vec<Layer>,
    pub dry_run: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn ArtifactRenderer>,
    filesystem: Box<dyn Filesystem>,
    project_root: PathBuf,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use strata_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     renderer,   // impl ArtifactRenderer
    ///     filesystem, // impl Filesystem
    ///     "./my-api",
    /// );
    /// ```
    pub fn new(
        renderer: Box<dyn ArtifactRenderer>,
        filesystem: Box<dyn Filesystem>,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            project_root: project_root.into(),
        }
    }

    #[instrument(
        skip_all,
        fields(
            model = request.name.as_str(),
            module = %request.module_root,
            dry_run = request.dry_run
        )
    )]
    pub fn scaffold(&self, request: ScaffoldRequest) -> StrataResult<ScaffoldReport> {
        validator::validate_module_root(&request.module_root).map_err(StrataError::Domain)?;
        if request.layers.is_empty() {
            return Err(ApplicationError::ValidationFailed("no layers requested".into()).into());
        }

        let ids = IdentifierSet::derive(request.name.as_str());
        info!(struct_name = ids.struct_name(), "Scaffolding");

        let _lock = if request.dry_run {
            None
        } else {
            Some(self.filesystem.lock(&self.project_root.join(LOCK_FILE))?)
        };

        let mut report = ScaffoldReport {
            model: ids.clone(),
            module_root: request.module_root.clone(),
            dry_run: request.dry_run,
            steps: Vec::with_capacity(request.layers.len()),
        };

        for layer in &request.layers {
            let step = self
                .run_layer(*layer, &ids, &request.module_root, request.dry_run)
                .map_err(|e| ApplicationError::StepFailed {
                    step: layer.to_string(),
                    source: Box::new(e),
                })?;
            report.steps.push(step);
        }

        info!(
            steps = report.steps.len(),
            warnings = report.warnings().len(),
            "Scaffold completed"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    #[instrument(skip_all, fields(layer = %layer))]
    fn run_layer(
        &self,
        layer: Layer,
        ids: &IdentifierSet,
        module_root: &str,
        dry_run: bool,
    ) -> StrataResult<StepReport> {
        let mut artifacts = Vec::with_capacity(layer.artifacts().len());
        for &kind in layer.artifacts() {
            let text = self.renderer.render(kind, ids, module_root)?;
            let relative = kind.relative_path(ids);
            let path = self.project_root.join(&relative);
            let replaced = self.filesystem.exists(&path);

            if !dry_run {
                if let Some(parent) = path.parent() {
                    self.filesystem.create_dir_all(parent)?;
                }
                self.filesystem.write_file(&path, &text.to_string())?;
            }
            debug!(artifact = %kind, path = %relative.display(), replaced, "Artifact written");

            artifacts.push(ArtifactReport {
                kind,
                path: relative,
                replaced,
            });
        }

        let aggregator = layer
            .aggregator()
            .map(|agg| {
                AggregatorUpdater::new(self.filesystem.as_ref(), &self.project_root)
                    .update(agg, ids, module_root, dry_run)
            })
            .transpose()?;

        Ok(StepReport {
            layer,
            artifacts,
            aggregator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{LockGuard, MockArtifactRenderer, MockFilesystem};
    use crate::domain::{ArtifactKind, SourceText};
    use crate::error::ErrorCategory;
    use mockall::predicate::{always, eq};

    fn renderer() -> MockArtifactRenderer {
        let mut r = MockArtifactRenderer::new();
        r.expect_render()
            .returning(|kind, ids, _| Ok(SourceText::parse(&format!("// {kind} {}\n", ids.struct_name()))));
        r
    }

    fn request(layers: Vec<Layer>, dry_run: bool) -> ScaffoldRequest {
        ScaffoldRequest {
            name: ModelName::parse("order").unwrap(),
            module_root: "shop".into(),
            layers,
            dry_run,
        }
    }

    #[test]
    fn model_layer_writes_one_file_under_the_lock() {
        let mut fs = MockFilesystem::new();
        fs.expect_lock()
            .with(eq(PathBuf::from("/p/.strata.lock")))
            .times(1)
            .returning(|_| Ok(LockGuard::noop()));
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .with(eq(PathBuf::from("/p/internal/app/domain/model")))
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .with(
                eq(PathBuf::from("/p/internal/app/domain/model/order.go")),
                eq("// model Order\n"),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(renderer()), Box::new(fs), "/p");
        let report = service.scaffold(request(vec![Layer::Model], false)).unwrap();

        assert_eq!(report.steps.len(), 1);
        assert_eq!(report.steps[0].artifacts[0].kind, ArtifactKind::Model);
        assert!(report.steps[0].aggregator.is_none());
    }

    #[test]
    fn dry_run_takes_no_lock_and_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_lock().never();
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();
        fs.expect_exists().return_const(false);

        let service = ScaffoldService::new(Box::new(renderer()), Box::new(fs), "/p");
        let report = service.scaffold(request(vec![Layer::Model], true)).unwrap();
        assert!(report.dry_run);
        assert_eq!(report.touched_files().len(), 1);
    }

    #[test]
    fn failing_step_is_named() {
        let mut fs = MockFilesystem::new();
        fs.expect_lock().returning(|_| Ok(LockGuard::noop()));
        // handlers.go is missing
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().with(always(), always()).returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(renderer()), Box::new(fs), "/p");
        let err = service
            .scaffold(request(vec![Layer::Handler], false))
            .unwrap_err();

        match &err {
            StrataError::Application(ApplicationError::StepFailed { step, .. }) => {
                assert_eq!(step, "handler")
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn lock_failure_aborts_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_lock().returning(|p| {
            Err(ApplicationError::LockFailed {
                path: p.to_path_buf(),
                reason: "held".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(MockArtifactRenderer::new()), Box::new(fs), "/p");
        let err = service.scaffold(request(vec![Layer::Model], false)).unwrap_err();
        assert!(err.is_retryable());
    }

    #[test]
    fn empty_layer_list_is_rejected() {
        let service = ScaffoldService::new(
            Box::new(MockArtifactRenderer::new()),
            Box::new(MockFilesystem::new()),
            "/p",
        );
        assert!(service.scaffold(request(vec![], false)).is_err());
    }
}
