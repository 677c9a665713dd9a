//! Brand CRUD handlers.

use crate::entities::CarBrandPayload;
use crate::error::AppError;
use crate::response::{Confirmation, BRAND_DELETED};
use crate::service::BrandService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CarBrandPayload>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let brand = BrandService::create(&state.pool, &payload).await?;
    Ok(Json(brand))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let brand = BrandService::read(&state.pool, id)
        .await?
        .ok_or(AppError::BrandNotFound)?;
    Ok(Json(brand))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CarBrandPayload>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let brand = BrandService::update(&state.pool, id, &payload)
        .await?
        .ok_or(AppError::BrandNotFound)?;
    Ok(Json(brand))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    BrandService::delete(&state.pool, id)
        .await?
        .ok_or(AppError::BrandNotFound)?;
    Ok(Json(Confirmation {
        message: BRAND_DELETED,
    }))
}
