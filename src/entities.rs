//! Row types and request payloads for the two catalogue entities.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A car manufacturer. Owns zero or more [`CarModel`] rows.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CarBrand {
    pub id: i32,
    pub name: String,
    pub logo: Option<String>,
    pub description: Option<String>,
}

/// Create/update body for a brand. Update rewrites every column from this
/// shape, omitted optional fields included.
#[derive(Debug, Clone, Deserialize)]
pub struct CarBrandPayload {
    pub name: String,
    pub logo: Option<String>,
    pub description: Option<String>,
}

/// A car model. `car_brand_id` points at a brand row; the reference is not
/// validated on write and is not cleaned up when the brand goes away.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CarModel {
    pub id: i32,
    pub name: String,
    pub car_brand_id: i32,
}

/// Create/update body for a model.
#[derive(Debug, Clone, Deserialize)]
pub struct CarModelPayload {
    pub name: String,
    pub car_brand_id: i32,
}
