//! End-to-end scaffold runs against a seeded Go project.

use std::path::{Path, PathBuf};

use strata_adapters::{FiberGormRenderer, LocalFilesystem, MemoryFilesystem};
use strata_core::application::ports::Filesystem;
use strata_core::prelude::*;
use tempfile::TempDir;

const HANDLERS: &str = "package adapters

import (
\t\"shop/internal/app/domain\"

\t\"github.com/gofiber/fiber/v2\"
)

type Handlers struct {
}

func NewHandlers(services *domain.Services) *Handlers {
\treturn &Handlers{}
}

func (h *Handlers) Configure(server *fiber.App) {
}
";

const SERVICES: &str = "package domain

import (
\t\"shop/internal/infra/database\"
)

type Services struct {
}

func NewServices(dbs *database.Databases) *Services {
\tservices := &Services{}
\treturn services
}
";

const DATABASES: &str = "package database

import (
\t\"fmt\"

\t\"gorm.io/gorm\"
)

type Databases struct {
\tRead  *gorm.DB
\tWrite *gorm.DB
}

func (d *Databases) runMigrations(db *gorm.DB) {
\tdb.AutoMigrate()
\tfmt.Println(\"migrated\")
}
";

fn aggregator_paths(root: &Path) -> [PathBuf; 3] {
    [
        root.join(Aggregator::HandlerRegistry.relative_path()),
        root.join(Aggregator::ServiceRegistry.relative_path()),
        root.join(Aggregator::MigrationList.relative_path()),
    ]
}

fn seeded_memory(root: &Path) -> MemoryFilesystem {
    let [handlers, services, databases] = aggregator_paths(root);
    MemoryFilesystem::new()
        .with_file(handlers, HANDLERS)
        .with_file(services, SERVICES)
        .with_file(databases, DATABASES)
}

fn request(name: &str, dry_run: bool) -> ScaffoldRequest {
    ScaffoldRequest {
        name: ModelName::parse(name).unwrap(),
        module_root: "shop".into(),
        layers: Layer::PIPELINE.to_vec(),
        dry_run,
    }
}

#[test]
fn full_pipeline_writes_artifacts_and_wires_aggregators() {
    let root = Path::new("/project");
    let fs = seeded_memory(root);
    let service = ScaffoldService::new(Box::new(FiberGormRenderer::new()), Box::new(fs.clone()), root);

    let report = service.scaffold(request("order", false)).unwrap();

    assert_eq!(report.steps.len(), 4);
    assert!(report.warnings().is_empty());
    for kind in ArtifactKind::ALL {
        let path = root.join(kind.relative_path(&report.model));
        assert!(fs.contents(&path).is_some(), "{kind} missing at {}", path.display());
    }

    let [handlers, services, databases] = aggregator_paths(root);
    let handlers = fs.contents(&handlers).unwrap();
    assert!(handlers.contains("\torderHandler *handler.OrderHandler\n"));
    assert!(handlers.contains("\treturn &Handlers{\n\t\torderHandler: handler.NewOrderHandler(services),\n\t}\n"));
    assert!(handlers.contains("\th.orderHandler.Configure(server)\n"));

    let services = fs.contents(&services).unwrap();
    assert!(services.contains("\tOrderService *orderService.OrderServiceImpl\n"));
    assert!(services.contains(
        "\t\tOrderService: orderService.NewOrderService(orderRepository.NewOrderRepository(dbs)),\n\t}\n"
    ));

    let databases = fs.contents(&databases).unwrap();
    assert!(databases.contains("import (\n\t\"shop/internal/app/domain/model\"\n\t\"fmt\""));
    assert!(databases.contains("\tdb.AutoMigrate(\n\t\t&model.Order{},\n\t)\n\tfmt.Println"));
}

#[test]
fn second_run_leaves_aggregators_byte_identical() {
    let root = Path::new("/project");
    let fs = seeded_memory(root);
    let service = ScaffoldService::new(Box::new(FiberGormRenderer::new()), Box::new(fs.clone()), root);

    service.scaffold(request("order", false)).unwrap();
    let first: Vec<_> = aggregator_paths(root).iter().map(|p| fs.contents(p)).collect();

    let report = service.scaffold(request("order", false)).unwrap();
    let second: Vec<_> = aggregator_paths(root).iter().map(|p| fs.contents(p)).collect();

    assert_eq!(first, second);
    for step in &report.steps {
        if let Some(agg) = &step.aggregator {
            assert_eq!(agg.outcome, UpdateOutcome::NoOpAlreadyPresent, "{}", agg.aggregator);
            assert!(!agg.changed);
        }
    }
}

#[test]
fn two_models_accumulate_in_order() {
    let root = Path::new("/project");
    let fs = seeded_memory(root);
    let service = ScaffoldService::new(Box::new(FiberGormRenderer::new()), Box::new(fs.clone()), root);

    service.scaffold(request("order", false)).unwrap();
    service.scaffold(request("customer", false)).unwrap();

    let databases = fs.contents(&aggregator_paths(root)[2]).unwrap();
    assert!(databases.contains("\t\t&model.Order{},\n\t\t&model.Customer{},\n\t)"));

    let handlers = fs.contents(&aggregator_paths(root)[0]).unwrap();
    assert_eq!(handlers.matches("internal/app/adapter/handler\"").count(), 1);
    assert!(handlers.contains(
        "\t\torderHandler: handler.NewOrderHandler(services),\n\t\tcustomerHandler: handler.NewCustomerHandler(services),\n"
    ));
}

#[test]
fn missing_landmark_is_a_warning_not_a_failure() {
    let root = Path::new("/project");
    let [handlers, ..] = aggregator_paths(root);
    let fs = seeded_memory(root).with_file(
        handlers.clone(),
        HANDLERS.replace("func (h *Handlers) Configure(server *fiber.App) {\n}\n", ""),
    );
    let service = ScaffoldService::new(Box::new(FiberGormRenderer::new()), Box::new(fs.clone()), root);

    let report = service.scaffold(request("order", false)).unwrap();

    let warnings = report.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("h.orderHandler.Configure(server)"));
    let content = fs.contents(&handlers).unwrap();
    assert!(content.contains("orderHandler: handler.NewOrderHandler(services),"));
    assert!(!content.contains("Configure(server)"));
}

#[test]
fn malformed_aggregator_fails_the_step_and_keeps_earlier_files() {
    let root = Path::new("/project");
    let [_, services, _] = aggregator_paths(root);
    let broken = SERVICES.replace(
        "\tservices := &Services{}\n\treturn services\n}\n",
        "\tservices := &Services{\n\t\tx: 1,\n",
    );
    let fs = seeded_memory(root).with_file(services.clone(), broken.clone());
    let service = ScaffoldService::new(Box::new(FiberGormRenderer::new()), Box::new(fs.clone()), root);

    let err = service.scaffold(request("order", false)).unwrap_err();

    assert!(err.to_string().contains("service"));
    assert_eq!(fs.contents(&services).as_deref(), Some(broken.as_str()));
    // model and repository steps completed before the failure
    let model = root.join(ArtifactKind::Model.relative_path(&IdentifierSet::derive("order")));
    assert!(fs.contents(&model).is_some());
}

#[test]
fn dry_run_touches_nothing() {
    let root = Path::new("/project");
    let fs = seeded_memory(root);
    let service = ScaffoldService::new(Box::new(FiberGormRenderer::new()), Box::new(fs.clone()), root);

    let report = service.scaffold(request("order", true)).unwrap();

    assert_eq!(fs.write_count(), 0);
    assert_eq!(report.touched_files().len(), 6 + 3);
}

#[test]
fn local_filesystem_pipeline_round_trip() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    let local = LocalFilesystem::new();
    for (path, content) in aggregator_paths(root).iter().zip([HANDLERS, SERVICES, DATABASES]) {
        local.create_dir_all(path.parent().unwrap()).unwrap();
        local.write_file(path, content).unwrap();
    }

    let service = ScaffoldService::new(Box::new(FiberGormRenderer::new()), Box::new(local), root);
    service.scaffold(request("userProfile", false)).unwrap();

    let handler = std::fs::read_to_string(root.join("internal/app/adapter/handler/userProfileHandler.go")).unwrap();
    assert!(handler.contains("route + \"/user-profile\""));
    let services = std::fs::read_to_string(root.join("internal/app/domain/services.go")).unwrap();
    assert!(services.contains("userProfileService \"shop/internal/app/domain/service/userProfile\""));
    // the lock file stays behind, unlocked
    assert!(root.join(".strata.lock").exists());
}
