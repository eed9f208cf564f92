//! Fixed Go source shapes for the Fiber + GORM project layout.
//!
//! Placeholders are resolved by [`strata_core::domain::RenderContext`].

use strata_core::domain::ArtifactKind;

pub fn shape(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Model => MODEL,
        ArtifactKind::RepositoryInterface => REPOSITORY_INTERFACE,
        ArtifactKind::RepositoryImpl => REPOSITORY_IMPL,
        ArtifactKind::ServiceInterface => SERVICE_INTERFACE,
        ArtifactKind::ServiceImpl => SERVICE_IMPL,
        ArtifactKind::Handler => HANDLER,
    }
}

const MODEL: &str = r#"package model

import "time"

type {{STRUCT}} struct {
	ID uint `gorm:"primaryKey;autoIncrement" json:"id"`
	{{STRUCT}} *string `json:"{{SNAKE}}"`
	CreatedAt time.Time `gorm:"autoCreateTime;not null" json:"created_at"`
	UpdatedAt time.Time `gorm:"autoUpdateTime;not null" json:"updated_at"`
	DeletedAt *time.Time `gorm:"index" json:"deleted_at"`
}

func ({{STRUCT}}) TableName() string {
	return "{{SNAKE}}"
}
"#;

const REPOSITORY_INTERFACE: &str = r#"package {{VAR}}Repository

import "{{MODULE}}/internal/app/domain/model"

type {{STRUCT}}Repository interface {
	Create({{VAR}} *model.{{STRUCT}}) error
	Update(id uint, {{VAR}} *model.{{STRUCT}}) error
	Delete(id uint) error
	FindAll() ([]*model.{{STRUCT}}, error)
	FindById(id uint) (*model.{{STRUCT}}, error)
}
"#;

const REPOSITORY_IMPL: &str = r#"package {{VAR}}Repository

import (
	"{{MODULE}}/internal/app/domain/model"
	"{{MODULE}}/internal/infra/database"
	"time"
)

var _ {{STRUCT}}Repository = (*{{STRUCT}}RepositoryImpl)(nil)

type {{STRUCT}}RepositoryImpl struct {
	db *database.Databases
}

func New{{STRUCT}}Repository(db *database.Databases) *{{STRUCT}}RepositoryImpl {
	return &{{STRUCT}}RepositoryImpl{db: db}
}

func (r *{{STRUCT}}RepositoryImpl) Create({{VAR}} *model.{{STRUCT}}) error {
	return r.db.Write.Create({{VAR}}).Error
}

func (r *{{STRUCT}}RepositoryImpl) Update(id uint, {{VAR}} *model.{{STRUCT}}) error {
	existing := &model.{{STRUCT}}{}
	if err := r.db.Write.First(existing, id).Error; err != nil {
		return err
	}
	return r.db.Write.Model(existing).Updates({{VAR}}).Error
}

func (r *{{STRUCT}}RepositoryImpl) Delete(id uint) error {
	{{VAR}} := &model.{{STRUCT}}{}
	if err := r.db.Write.First({{VAR}}, id).Error; err != nil {
		return err
	}
	return r.db.Write.Model({{VAR}}).Update("deleted_at", time.Now()).Error
}

func (r *{{STRUCT}}RepositoryImpl) FindAll() ([]*model.{{STRUCT}}, error) {
	var {{VAR}}s []*model.{{STRUCT}}
	err := r.db.Read.
		Where("deleted_at IS NULL").
		Find(&{{VAR}}s).Error
	return {{VAR}}s, err
}

func (r *{{STRUCT}}RepositoryImpl) FindById(id uint) (*model.{{STRUCT}}, error) {
	var {{VAR}} model.{{STRUCT}}
	err := r.db.Read.
		Where("id = ? AND deleted_at IS NULL", id).
		First(&{{VAR}}).Error
	return &{{VAR}}, err
}
"#;

const SERVICE_INTERFACE: &str = r#"package {{VAR}}Service

import "{{MODULE}}/internal/app/domain/model"

type {{STRUCT}}Service interface {
	Create({{VAR}} *model.{{STRUCT}}) error
	Update(id uint, {{VAR}} *model.{{STRUCT}}) error
	Delete(id uint) error
	FindAll() ([]*model.{{STRUCT}}, error)
	FindById(id uint) (*model.{{STRUCT}}, error)
}
"#;

const SERVICE_IMPL: &str = r#"package {{VAR}}Service

import (
	"{{MODULE}}/internal/app/domain/model"
	{{VAR}}Repository "{{MODULE}}/internal/app/domain/repository/{{VAR}}"
)

var _ {{STRUCT}}Service = (*{{STRUCT}}ServiceImpl)(nil)

type {{STRUCT}}ServiceImpl struct {
	repository {{VAR}}Repository.{{STRUCT}}Repository
}

func New{{STRUCT}}Service(repository {{VAR}}Repository.{{STRUCT}}Repository) *{{STRUCT}}ServiceImpl {
	return &{{STRUCT}}ServiceImpl{repository: repository}
}

func (s *{{STRUCT}}ServiceImpl) Create({{VAR}} *model.{{STRUCT}}) error {
	return s.repository.Create({{VAR}})
}

func (s *{{STRUCT}}ServiceImpl) Update(id uint, {{VAR}} *model.{{STRUCT}}) error {
	return s.repository.Update(id, {{VAR}})
}

func (s *{{STRUCT}}ServiceImpl) Delete(id uint) error {
	return s.repository.Delete(id)
}

func (s *{{STRUCT}}ServiceImpl) FindAll() ([]*model.{{STRUCT}}, error) {
	return s.repository.FindAll()
}

func (s *{{STRUCT}}ServiceImpl) FindById(id uint) (*model.{{STRUCT}}, error) {
	return s.repository.FindById(id)
}
"#;

const HANDLER: &str = r#"package handler

import (
	"{{MODULE}}/internal/app/domain"
	"{{MODULE}}/internal/app/domain/model"
	"{{MODULE}}/internal/app/transport/presenter"
	"{{MODULE}}/internal/infra/variables"
	"strconv"

	"github.com/gofiber/fiber/v2"
)

type {{STRUCT}}Handler struct {
	services *domain.Services
}

func New{{STRUCT}}Handler(services *domain.Services) *{{STRUCT}}Handler {
	return &{{STRUCT}}Handler{
		services: services,
	}
}

func (h *{{STRUCT}}Handler) Configure(server *fiber.App) {
	route := variables.PrefixRoute()

	// {{VAR}} routes
	serviceRoute := route + "/{{URL}}"
	server.Get(serviceRoute, h.getAll{{STRUCT}}s)
	server.Get(serviceRoute+"/:id", h.get{{STRUCT}}ById)
	server.Post(serviceRoute, h.create{{STRUCT}})
	server.Put(serviceRoute+"/:id", h.update{{STRUCT}})
	server.Delete(serviceRoute+"/:id", h.delete{{STRUCT}})
}

// @Summary Get all {{STRUCT}}s
// @Tags {{STRUCT}}s
// @Produce json
// @Success 200 {array} model.{{STRUCT}} "Success"
// @Router /api/v1/{{URL}} [get]
func (h *{{STRUCT}}Handler) getAll{{STRUCT}}s(c *fiber.Ctx) error {
	{{VAR}}s, err := h.services.{{STRUCT}}Service.FindAll()
	if err != nil {
		return c.Status(fiber.StatusInternalServerError).JSON(fiber.Map{"error": err.Error()})
	}
	return c.JSON(presenter.Success("Data retrieved successfully", {{VAR}}s))
}

// @Summary Get {{STRUCT}} by ID
// @Tags {{STRUCT}}s
// @Produce json
// @Param id path int true "{{STRUCT}} ID"
// @Success 200 {object} model.{{STRUCT}} "Success"
// @Router /api/v1/{{URL}}/{id} [get]
func (h *{{STRUCT}}Handler) get{{STRUCT}}ById(c *fiber.Ctx) error {
	id, err := strconv.Atoi(c.Params("id"))
	if err != nil {
		return c.Status(fiber.StatusBadRequest).JSON(fiber.Map{"error": "Invalid ID"})
	}

	{{VAR}}, err := h.services.{{STRUCT}}Service.FindById(uint(id))
	if err != nil {
		return c.Status(fiber.StatusNotFound).JSON(fiber.Map{"error": "{{STRUCT}} not found"})
	}
	return c.JSON({{VAR}})
}

// @Summary Create a new {{STRUCT}}
// @Tags {{STRUCT}}s
// @Accept json
// @Produce json
// @Param {{STRUCT}} body model.{{STRUCT}} true "{{STRUCT}} Data"
// @Success 201 {object} model.{{STRUCT}} "Created"
// @Router /api/v1/{{URL}} [post]
func (h *{{STRUCT}}Handler) create{{STRUCT}}(c *fiber.Ctx) error {
	{{VAR}} := new(model.{{STRUCT}})
	if err := c.BodyParser({{VAR}}); err != nil {
		return c.Status(fiber.StatusBadRequest).JSON(fiber.Map{"error": err.Error()})
	}

	if err := h.services.{{STRUCT}}Service.Create({{VAR}}); err != nil {
		return c.Status(fiber.StatusInternalServerError).JSON(fiber.Map{"error": err.Error()})
	}
	return c.Status(fiber.StatusCreated).JSON(presenter.Success("Success", {{VAR}}))
}

// @Summary Update an existing {{STRUCT}}
// @Tags {{STRUCT}}s
// @Accept json
// @Produce json
// @Param id path int true "{{STRUCT}} ID"
// @Param {{STRUCT}} body model.{{STRUCT}} true "{{STRUCT}} Data"
// @Success 200 {object} model.{{STRUCT}} "Updated"
// @Router /api/v1/{{URL}}/{id} [put]
func (h *{{STRUCT}}Handler) update{{STRUCT}}(c *fiber.Ctx) error {
	id, err := strconv.Atoi(c.Params("id"))
	if err != nil {
		return c.Status(fiber.StatusBadRequest).JSON(fiber.Map{"error": "Invalid ID"})
	}

	{{VAR}} := new(model.{{STRUCT}})
	if err := c.BodyParser({{VAR}}); err != nil {
		return c.Status(fiber.StatusBadRequest).JSON(fiber.Map{"error": err.Error()})
	}

	{{VAR}}.ID = uint(id)
	if err := h.services.{{STRUCT}}Service.Update({{VAR}}.ID, {{VAR}}); err != nil {
		return c.Status(fiber.StatusInternalServerError).JSON(fiber.Map{"error": err.Error()})
	}
	return c.JSON(presenter.Success("Updated successfully", {{VAR}}))
}

// @Summary Delete a {{STRUCT}}
// @Tags {{STRUCT}}s
// @Param id path int true "{{STRUCT}} ID"
// @Success 200 "Deleted successfully"
// @Router /api/v1/{{URL}}/{id} [delete]
func (h *{{STRUCT}}Handler) delete{{STRUCT}}(c *fiber.Ctx) error {
	id, err := strconv.Atoi(c.Params("id"))
	if err != nil {
		return c.Status(fiber.StatusBadRequest).JSON(fiber.Map{"error": "Invalid ID"})
	}

	if err := h.services.{{STRUCT}}Service.Delete(uint(id)); err != nil {
		return c.Status(fiber.StatusInternalServerError).JSON(fiber.Map{"error": err.Error()})
	}
	return c.JSON(presenter.Success("Deleted successfully", nil))
}
"#;
