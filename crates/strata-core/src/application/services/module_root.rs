//! Resolving the Go module path generated imports are rooted at.

use std::path::Path;

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::domain::DomainValidator;
use crate::error::{StrataError, StrataResult};

/// Where the module root came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleRootSource {
    Flag,
    Config,
    GoMod,
    DirectoryName,
}

/// Pick the module root, first match wins:
///
/// 1. `explicit` (the `--module` flag)
/// 2. `configured` (config file / environment)
/// 3. the `module` directive of `<project_root>/go.mod`
/// 4. the base name of `project_root`
pub fn resolve_module_root(
    filesystem: &dyn Filesystem,
    project_root: &Path,
    explicit: Option<&str>,
    configured: Option<&str>,
) -> StrataResult<(String, ModuleRootSource)> {
    let (module, source) = if let Some(m) = explicit {
        (m.to_string(), ModuleRootSource::Flag)
    } else if let Some(m) = configured {
        (m.to_string(), ModuleRootSource::Config)
    } else if let Some(m) = read_go_mod(filesystem, project_root)? {
        (m, ModuleRootSource::GoMod)
    } else {
        let name = project_root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        (name, ModuleRootSource::DirectoryName)
    };

    DomainValidator::validate_module_root(&module).map_err(StrataError::Domain)?;
    debug!(module = %module, ?source, "Module root resolved");
    Ok((module, source))
}

fn read_go_mod(filesystem: &dyn Filesystem, project_root: &Path) -> StrataResult<Option<String>> {
    let path = project_root.join("go.mod");
    if !filesystem.exists(&path) {
        return Ok(None);
    }
    let content = filesystem.read_file(&path)?;
    Ok(parse_module_directive(&content))
}

/// The path from a `module <path>` line, quotes and trailing comment removed.
pub fn parse_module_directive(go_mod: &str) -> Option<String> {
    go_mod.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let rest = rest.split("//").next().unwrap_or_default().trim();
        let module = rest.trim_matches('"').trim_matches('`');
        (!module.is_empty()).then(|| module.to_string())
    })
}
