//! Brand-scoped listing and keyword search across model names.

use crate::error::AppError;
use crate::service::{BrandService, ModelService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchParams {
    pub keywords: String,
}

/// All models of the named brand. An unknown brand is a 404; a known brand
/// with no models is an empty list.
pub async fn by_brand(
    State(state): State<AppState>,
    Path(brand_name): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let brand = BrandService::find_by_name(&state.pool, &brand_name)
        .await?
        .ok_or(AppError::BrandNotFound)?;
    let models = ModelService::list_by_brand(&state.pool, brand.id).await?;
    Ok(Json(models))
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let models = ModelService::search(&state.pool, &params.keywords).await?;
    Ok(Json(models))
}
