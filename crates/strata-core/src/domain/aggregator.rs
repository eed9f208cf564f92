//! Aggregator files and the edits that wire a new model into them.
//!
//! | Aggregator        | File                                   |
//! |-------------------|----------------------------------------|
//! | `HandlerRegistry` | `internal/app/adapter/handlers.go`     |
//! | `ServiceRegistry` | `internal/app/domain/services.go`      |
//! | `MigrationList`   | `internal/infra/database/databases.go` |

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::identifiers::IdentifierSet;
use crate::domain::splicing::{
    Edit, EditKind, EditOutcome, Landmark, SourceText, append_argument, apply_edits,
};

pub const MIGRATION_SIGNATURE: &str = "func (d *Databases) runMigrations(db *gorm.DB) {";
pub const MIGRATION_CALL: &str = "db.AutoMigrate(";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregator {
    HandlerRegistry,
    ServiceRegistry,
    MigrationList,
}

impl Aggregator {
    pub fn relative_path(self) -> PathBuf {
        PathBuf::from(match self {
            Self::HandlerRegistry => "internal/app/adapter/handlers.go",
            Self::ServiceRegistry => "internal/app/domain/services.go",
            Self::MigrationList => "internal/infra/database/databases.go",
        })
    }

    /// Line edits for one model, in application order.
    ///
    /// The migration entry itself is not a line edit (see [`append_argument`]);
    /// only its import is listed here.
    pub fn edits(self, ids: &IdentifierSet, module_root: &str) -> Vec<Edit> {
        let s = ids.struct_name();
        let v = ids.var_name();
        let import = || Landmark::after_line("import (");

        match self {
            Self::HandlerRegistry => vec![
                Edit::new(
                    EditKind::Import,
                    import(),
                    format!("\t\"{module_root}/internal/app/adapter/handler\""),
                ),
                Edit::new(
                    EditKind::Field,
                    Landmark::after_line("type Handlers struct {"),
                    format!("\t{v}Handler *handler.{s}Handler"),
                ),
                Edit::new(
                    EditKind::ConstructorEntry,
                    Landmark::before_block_close("return &Handlers{"),
                    format!("\t\t{v}Handler: handler.New{s}Handler(services),"),
                ),
                Edit::new(
                    EditKind::DispatchCall,
                    Landmark::after_line("func (h *Handlers) Configure(server *fiber.App) {"),
                    format!("\th.{v}Handler.Configure(server)"),
                ),
            ],
            Self::ServiceRegistry => vec![
                Edit::new(
                    EditKind::Import,
                    import(),
                    format!("\t{v}Repository \"{module_root}/internal/app/domain/repository/{v}\""),
                ),
                Edit::new(
                    EditKind::Import,
                    import(),
                    format!("\t{v}Service \"{module_root}/internal/app/domain/service/{v}\""),
                ),
                Edit::new(
                    EditKind::Field,
                    Landmark::after_line("type Services struct {"),
                    format!("\t{s}Service *{v}Service.{s}ServiceImpl"),
                ),
                Edit::new(
                    EditKind::ConstructorEntry,
                    Landmark::before_block_close("services := &Services{"),
                    format!(
                        "\t\t{s}Service: {v}Service.New{s}Service({v}Repository.New{s}Repository(dbs)),"
                    ),
                ),
            ],
            Self::MigrationList => vec![Edit::new(
                EditKind::Import,
                import(),
                format!("\t\"{module_root}/internal/app/domain/model\""),
            )],
        }
    }

    /// Compute the new contents of this aggregator for one model.
    ///
    /// Pure: the caller reads `original` and writes back
    /// [`AggregatorUpdate::content`] only when [`AggregatorUpdate::changed`].
    /// A structural error means the file must be left untouched.
    pub fn update(
        self,
        original: &str,
        ids: &IdentifierSet,
        module_root: &str,
    ) -> Result<AggregatorUpdate, DomainError> {
        let edits = self.edits(ids, module_root);
        let mut text = SourceText::parse(original);
        let outcomes = apply_edits(&mut text, &edits)?;

        let mut records: Vec<EditRecord> = edits
            .iter()
            .zip(outcomes)
            .map(|(edit, outcome)| EditRecord {
                kind: edit.kind(),
                line: edit.line().trim().to_string(),
                landmark: edit.landmark().needle().to_string(),
                outcome,
            })
            .collect();

        let mut content = text.to_string();
        if self == Self::MigrationList {
            let entry = format!("&model.{}{{}}", ids.struct_name());
            let (updated, outcome) =
                append_argument(&content, MIGRATION_SIGNATURE, MIGRATION_CALL, &entry)?;
            content = updated;
            records.push(EditRecord {
                kind: EditKind::MigrationEntry,
                line: entry,
                landmark: MIGRATION_CALL.to_string(),
                outcome,
            });
        }

        let outcome = UpdateOutcome::summarize(&records);
        debug!(aggregator = %self, ?outcome, "Aggregator edits computed");
        Ok(AggregatorUpdate {
            aggregator: self,
            changed: content != original,
            content,
            outcome,
            edits: records,
        })
    }
}

impl fmt::Display for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::HandlerRegistry => "handler registry",
            Self::ServiceRegistry => "service registry",
            Self::MigrationList => "migration list",
        };
        f.write_str(s)
    }
}

/// Overall result for one aggregator file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOutcome {
    /// At least one edit was applied.
    Updated,
    /// Every edit was already in place.
    NoOpAlreadyPresent,
    /// Nothing was applied and at least one landmark was missing.
    LandmarkMissing,
}

impl UpdateOutcome {
    fn summarize(records: &[EditRecord]) -> Self {
        if records.iter().any(|r| r.outcome == EditOutcome::Applied) {
            Self::Updated
        } else if records.iter().any(|r| r.outcome == EditOutcome::LandmarkMissing) {
            Self::LandmarkMissing
        } else {
            Self::NoOpAlreadyPresent
        }
    }
}

/// What happened to one edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditRecord {
    pub kind: EditKind,
    pub line: String,
    pub landmark: String,
    pub outcome: EditOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorUpdate {
    pub aggregator: Aggregator,
    pub content: String,
    pub changed: bool,
    pub outcome: UpdateOutcome,
    pub edits: Vec<EditRecord>,
}

impl AggregatorUpdate {
    /// Edits skipped because their landmark was missing.
    pub fn missing_landmarks(&self) -> impl Iterator<Item = &EditRecord> {
        self.edits
            .iter()
            .filter(|r| r.outcome == EditOutcome::LandmarkMissing)
    }
}
