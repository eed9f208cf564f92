//! Renderer for Go Fiber + GORM projects.

use tracing::{instrument, trace};

use strata_core::{
    application::{ApplicationError, ports::ArtifactRenderer},
    domain::{ArtifactKind, IdentifierSet, RenderContext, SourceText},
    error::StrataResult,
};

use super::shapes::shape;

/// Renders artifacts by substituting identifiers into fixed Go shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FiberGormRenderer;

impl FiberGormRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactRenderer for FiberGormRenderer {
    #[instrument(skip_all, fields(kind = %kind, model = ids.raw()))]
    fn render(
        &self,
        kind: ArtifactKind,
        ids: &IdentifierSet,
        module_root: &str,
    ) -> StrataResult<SourceText> {
        let ctx = RenderContext::new(ids, module_root);
        let rendered = ctx.render(shape(kind));

        if let Some(at) = rendered.find("{{") {
            let end = rendered[at..].find("}}").map_or(rendered.len(), |e| at + e + 2);
            return Err(ApplicationError::RenderingFailed {
                reason: format!("unresolved placeholder {}", &rendered[at..end]),
            }
            .into());
        }

        trace!(bytes = rendered.len(), "Artifact rendered");
        Ok(SourceText::parse(&rendered))
    }
}
