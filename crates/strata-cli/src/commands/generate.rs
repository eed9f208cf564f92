//! Implementation of `strata model`, `repository`, `service` and `handler`.
//!
//! Responsibility: translate CLI arguments into a `ScaffoldRequest`, call the
//! core scaffold service, and display the report. No splicing logic lives
//! here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use strata_adapters::{FiberGormRenderer, LocalFilesystem};
use strata_core::{
    application::{
        AggregatorReport, ModuleRootSource, ScaffoldReport, ScaffoldRequest, ScaffoldService,
        resolve_module_root,
    },
    domain::{Layer, ModelName, UpdateOutcome},
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute one of the generation subcommands for the given layers.
///
/// Dispatch sequence:
/// 1. Validate the resource name and project directory
/// 2. Resolve the module root (flag, config, go.mod, directory name)
/// 3. Run the scaffold pipeline under the project lock
/// 4. Print the report and any landmark warnings
#[instrument(skip_all, fields(model = %args.name, layers = layers.len()))]
pub fn execute(
    args: GenerateArgs,
    layers: Vec<Layer>,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let name = ModelName::parse(&args.name).map_err(|e| CliError::Core(e.into()))?;
    let project_root = resolve_project_root(&args.project_dir)?;

    let filesystem = LocalFilesystem::new();
    let (module_root, source) = resolve_module_root(
        &filesystem,
        &project_root,
        args.module.as_deref(),
        config.defaults.module.as_deref(),
    )
    .with_cli_context(|| "resolving module root")?;
    debug!(module = %module_root, source = source_label(source), "Module root");

    let service = ScaffoldService::new(
        Box::new(FiberGormRenderer::new()),
        Box::new(filesystem),
        project_root.clone(),
    );

    info!(project = %project_root.display(), "Scaffold started");
    let report = service
        .scaffold(ScaffoldRequest {
            name,
            module_root,
            layers,
            dry_run: args.dry_run,
        })
        .map_err(CliError::Core)?;

    print_report(&report, source, output)?;
    Ok(())
}

// ── Project root ──────────────────────────────────────────────────────────────

fn resolve_project_root(dir: &Path) -> CliResult<PathBuf> {
    if !dir.is_dir() {
        return Err(CliError::ProjectNotFound {
            path: dir.to_path_buf(),
        });
    }
    dir.canonicalize()
        .with_cli_context(|| format!("resolving project directory '{}'", dir.display()))
}

fn source_label(source: ModuleRootSource) -> &'static str {
    match source {
        ModuleRootSource::Flag => "--module",
        ModuleRootSource::Config => "config",
        ModuleRootSource::GoMod => "go.mod",
        ModuleRootSource::DirectoryName => "directory name",
    }
}

// ── Report rendering ──────────────────────────────────────────────────────────

fn print_report(
    report: &ScaffoldReport,
    source: ModuleRootSource,
    output: &OutputManager,
) -> CliResult<()> {
    let warnings = report.warnings();

    if output.format() == OutputFormat::Json {
        output.json(report)?;
    } else {
        let verb = if report.dry_run { "Would scaffold" } else { "Scaffolding" };
        output.header(&format!(
            "{verb} {} (module {} from {})",
            report.model.struct_name(),
            report.module_root,
            source_label(source),
        ))?;

        for step in &report.steps {
            for artifact in &step.artifacts {
                let action = match (report.dry_run, artifact.replaced) {
                    (true, true) => "would replace",
                    (true, false) => "would create",
                    (false, true) => "replaced",
                    (false, false) => "created",
                };
                output.success(&format!("{} {action}", artifact.path.display()))?;
            }
            if let Some(aggregator) = &step.aggregator {
                print_aggregator(aggregator, report.dry_run, output)?;
            }
        }
    }

    for warning in &warnings {
        output.warning(warning)?;
    }

    if output.format() != OutputFormat::Json && !output.is_quiet() {
        let touched = report.touched_files().len();
        let summary = if report.dry_run {
            format!("Dry run: {touched} file(s) would be written")
        } else {
            format!("{touched} file(s) written")
        };
        output.print("")?;
        output.info(&summary)?;
        if !warnings.is_empty() {
            output.info(&format!(
                "{} edit(s) need manual attention, see the warnings above",
                warnings.len()
            ))?;
        }
    }

    Ok(())
}

fn print_aggregator(
    aggregator: &AggregatorReport,
    dry_run: bool,
    output: &OutputManager,
) -> std::io::Result<()> {
    let path = aggregator.path.display();
    match aggregator.outcome {
        UpdateOutcome::Updated if dry_run => output.success(&format!("{path} would be updated")),
        UpdateOutcome::Updated => output.success(&format!("{path} updated")),
        UpdateOutcome::NoOpAlreadyPresent => {
            output.info(&format!("{path} already wires this {}", aggregator.aggregator))
        }
        // the individual edits are reported as warnings
        UpdateOutcome::LandmarkMissing => Ok(()),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_project_dir_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = resolve_project_root(&dir.path().join("absent")).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn existing_project_dir_is_canonicalised() {
        let dir = TempDir::new().unwrap();
        let root = resolve_project_root(dir.path()).unwrap();
        assert!(root.is_absolute());
    }

    #[test]
    fn source_labels_name_the_origin() {
        assert_eq!(source_label(ModuleRootSource::GoMod), "go.mod");
        assert_eq!(source_label(ModuleRootSource::Flag), "--module");
    }
}
