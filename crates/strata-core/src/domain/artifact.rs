//! Artifacts, layers and the substitution context used to render them.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::aggregator::Aggregator;
use crate::domain::identifiers::IdentifierSet;

/// One standalone source file emitted for a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Model,
    RepositoryInterface,
    RepositoryImpl,
    ServiceInterface,
    ServiceImpl,
    Handler,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 6] = [
        Self::Model,
        Self::RepositoryInterface,
        Self::RepositoryImpl,
        Self::ServiceInterface,
        Self::ServiceImpl,
        Self::Handler,
    ];

    /// Location of the artifact relative to the project root.
    pub fn relative_path(self, ids: &IdentifierSet) -> PathBuf {
        let var = ids.var_name();
        match self {
            Self::Model => PathBuf::from(format!("internal/app/domain/model/{var}.go")),
            Self::RepositoryInterface => PathBuf::from(format!(
                "internal/app/domain/repository/{var}/{var}Repository.go"
            )),
            Self::RepositoryImpl => PathBuf::from(format!(
                "internal/app/domain/repository/{var}/{var}RepositoryImpl.go"
            )),
            Self::ServiceInterface => {
                PathBuf::from(format!("internal/app/domain/service/{var}/{var}Service.go"))
            }
            Self::ServiceImpl => PathBuf::from(format!(
                "internal/app/domain/service/{var}/{var}ServiceImpl.go"
            )),
            Self::Handler => PathBuf::from(format!("internal/app/adapter/handler/{var}Handler.go")),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Model => "model",
            Self::RepositoryInterface => "repository interface",
            Self::RepositoryImpl => "repository implementation",
            Self::ServiceInterface => "service interface",
            Self::ServiceImpl => "service implementation",
            Self::Handler => "handler",
        };
        f.write_str(s)
    }
}

/// A generation step: a set of artifacts plus at most one aggregator to wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Model,
    Repository,
    Service,
    Handler,
}

impl Layer {
    /// The full pipeline, in the order a model is built up.
    pub const PIPELINE: [Layer; 4] = [Self::Model, Self::Repository, Self::Service, Self::Handler];

    pub fn artifacts(self) -> &'static [ArtifactKind] {
        match self {
            Self::Model => &[ArtifactKind::Model],
            Self::Repository => &[ArtifactKind::RepositoryInterface, ArtifactKind::RepositoryImpl],
            Self::Service => &[ArtifactKind::ServiceInterface, ArtifactKind::ServiceImpl],
            Self::Handler => &[ArtifactKind::Handler],
        }
    }

    pub fn aggregator(self) -> Option<Aggregator> {
        match self {
            Self::Model => None,
            Self::Repository => Some(Aggregator::MigrationList),
            Self::Service => Some(Aggregator::ServiceRegistry),
            Self::Handler => Some(Aggregator::HandlerRegistry),
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Model => "model",
            Self::Repository => "repository",
            Self::Service => "service",
            Self::Handler => "handler",
        };
        f.write_str(s)
    }
}

/// Placeholder values for one model.
///
/// ## Variables
///
/// | Placeholder  | Example (`userProfile`, module `shop`) |
/// |--------------|----------------------------------------|
/// | `{{STRUCT}}` | `UserProfile`                          |
/// | `{{VAR}}`    | `userProfile`                          |
/// | `{{SNAKE}}`  | `user_profile`                         |
/// | `{{URL}}`    | `user-profile`                         |
/// | `{{MODULE}}` | `shop`                                 |
///
/// Unknown placeholders are left as-is.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: [(&'static str, String); 5],
}

impl RenderContext {
    pub fn new(ids: &IdentifierSet, module_root: &str) -> Self {
        let variables = [
            ("STRUCT", ids.struct_name().to_string()),
            ("VAR", ids.var_name().to_string()),
            ("SNAKE", ids.snake_name().to_string()),
            ("URL", ids.url_name().to_string()),
            ("MODULE", module_root.to_string()),
        ];
        Self { variables }
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Replace every `{{KEY}}` with its value in a single left-to-right pass.
    /// Substituted values are never scanned again.
    pub fn render(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}").and_then(|end| Some((end, self.lookup(&after[..end])?))) {
                Some((end, value)) => {
                    result.push_str(value);
                    rest = &after[end + 2..];
                }
                None => {
                    result.push_str("{{");
                    rest = after;
                }
            }
        }
        result.push_str(rest);
        result
    }
}
