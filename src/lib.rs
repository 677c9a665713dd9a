//! ucars: car catalogue CRUD backend over PostgreSQL.

pub mod config;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use entities::{CarBrand, CarBrandPayload, CarModel, CarModelPayload};
pub use error::AppError;
pub use routes::{brand_routes, car_routes, common_routes, model_routes, router};
pub use service::{BrandService, ModelService};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
