//! Typed store operations against PostgreSQL.

mod brands;
mod models;

pub use brands::BrandService;
pub use models::ModelService;
