//! Brand rows: single-row CRUD and exact-name lookup.

use crate::entities::{CarBrand, CarBrandPayload};
use crate::error::AppError;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, logo, description";

pub struct BrandService;

impl BrandService {
    /// Insert one brand; returns the row including its generated id. A
    /// duplicate name trips the unique index and surfaces as a store error.
    pub async fn create(pool: &PgPool, payload: &CarBrandPayload) -> Result<CarBrand, AppError> {
        tracing::debug!(name = %payload.name, "insert brand");
        let row = sqlx::query_as::<_, CarBrand>(&format!(
            "INSERT INTO car_brands (name, logo, description) VALUES ($1, $2, $3) RETURNING {}",
            COLUMNS
        ))
        .bind(&payload.name)
        .bind(&payload.logo)
        .bind(&payload.description)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Fetch one brand by id. A miss is a normal outcome, not an error.
    pub async fn read(pool: &PgPool, id: i32) -> Result<Option<CarBrand>, AppError> {
        let row = sqlx::query_as::<_, CarBrand>(&format!(
            "SELECT {} FROM car_brands WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Fetch one brand by exact name match.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<CarBrand>, AppError> {
        let row = sqlx::query_as::<_, CarBrand>(&format!(
            "SELECT {} FROM car_brands WHERE name = $1",
            COLUMNS
        ))
        .bind(name)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Overwrite every column from the payload (full replace, not a patch).
    /// Returns None when no row has this id.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        payload: &CarBrandPayload,
    ) -> Result<Option<CarBrand>, AppError> {
        tracing::debug!(id, name = %payload.name, "update brand");
        let row = sqlx::query_as::<_, CarBrand>(&format!(
            "UPDATE car_brands SET name = $1, logo = $2, description = $3 WHERE id = $4 RETURNING {}",
            COLUMNS
        ))
        .bind(&payload.name)
        .bind(&payload.logo)
        .bind(&payload.description)
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Remove one brand by id. Models referencing it are left untouched.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<CarBrand>, AppError> {
        tracing::debug!(id, "delete brand");
        let row = sqlx::query_as::<_, CarBrand>(&format!(
            "DELETE FROM car_brands WHERE id = $1 RETURNING {}",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }
}
