//! Model CRUD handlers.

use crate::entities::CarModelPayload;
use crate::error::AppError;
use crate::response::{Confirmation, MODEL_DELETED};
use crate::service::ModelService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CarModelPayload>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let model = ModelService::create(&state.pool, &payload).await?;
    Ok(Json(model))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let model = ModelService::read(&state.pool, id)
        .await?
        .ok_or(AppError::ModelNotFound)?;
    Ok(Json(model))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CarModelPayload>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let model = ModelService::update(&state.pool, id, &payload)
        .await?
        .ok_or(AppError::ModelNotFound)?;
    Ok(Json(model))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    ModelService::delete(&state.pool, id)
        .await?
        .ok_or(AppError::ModelNotFound)?;
    Ok(Json(Confirmation {
        message: MODEL_DELETED,
    }))
}
