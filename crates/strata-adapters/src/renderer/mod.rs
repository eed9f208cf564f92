//! Artifact renderers.

mod fiber_gorm;
mod shapes;

pub use fiber_gorm::FiberGormRenderer;
