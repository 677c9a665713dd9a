//! Model rows: single-row CRUD, brand-scoped listing, keyword search.

use crate::entities::{CarModel, CarModelPayload};
use crate::error::AppError;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, car_brand_id";

/// Substring pattern for ILIKE. Keywords go in verbatim; `%`/`_` in the input
/// keep their LIKE meaning, as in the original service.
fn like_pattern(keywords: &str) -> String {
    format!("%{}%", keywords)
}

pub struct ModelService;

impl ModelService {
    /// Insert one model. The brand reference is taken as-is; nothing checks
    /// that the brand exists.
    pub async fn create(pool: &PgPool, payload: &CarModelPayload) -> Result<CarModel, AppError> {
        tracing::debug!(name = %payload.name, brand = payload.car_brand_id, "insert model");
        let row = sqlx::query_as::<_, CarModel>(&format!(
            "INSERT INTO car_models (name, car_brand_id) VALUES ($1, $2) RETURNING {}",
            COLUMNS
        ))
        .bind(&payload.name)
        .bind(payload.car_brand_id)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Fetch one model by id. A miss is a normal outcome, not an error.
    pub async fn read(pool: &PgPool, id: i32) -> Result<Option<CarModel>, AppError> {
        let row = sqlx::query_as::<_, CarModel>(&format!(
            "SELECT {} FROM car_models WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Overwrite every column from the payload (full replace, not a patch).
    pub async fn update(
        pool: &PgPool,
        id: i32,
        payload: &CarModelPayload,
    ) -> Result<Option<CarModel>, AppError> {
        tracing::debug!(id, name = %payload.name, "update model");
        let row = sqlx::query_as::<_, CarModel>(&format!(
            "UPDATE car_models SET name = $1, car_brand_id = $2 WHERE id = $3 RETURNING {}",
            COLUMNS
        ))
        .bind(&payload.name)
        .bind(payload.car_brand_id)
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Remove one model by id.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<CarModel>, AppError> {
        tracing::debug!(id, "delete model");
        let row = sqlx::query_as::<_, CarModel>(&format!(
            "DELETE FROM car_models WHERE id = $1 RETURNING {}",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// All models belonging to one brand. Empty is fine.
    pub async fn list_by_brand(pool: &PgPool, brand_id: i32) -> Result<Vec<CarModel>, AppError> {
        let rows = sqlx::query_as::<_, CarModel>(&format!(
            "SELECT {} FROM car_models WHERE car_brand_id = $1",
            COLUMNS
        ))
        .bind(brand_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Case-insensitive substring match over model names. No anchoring, no
    /// ranking, no pagination.
    pub async fn search(pool: &PgPool, keywords: &str) -> Result<Vec<CarModel>, AppError> {
        tracing::debug!(keywords, "search models");
        let rows = sqlx::query_as::<_, CarModel>(&format!(
            "SELECT {} FROM car_models WHERE name ILIKE $1",
            COLUMNS
        ))
        .bind(like_pattern(keywords))
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_is_unanchored() {
        assert_eq!(like_pattern("cor"), "%cor%");
    }

    #[test]
    fn pattern_does_not_escape_like_metacharacters() {
        assert_eq!(like_pattern("100%"), "%100%%");
        assert_eq!(like_pattern("a_b"), "%a_b%");
    }
}
