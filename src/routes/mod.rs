//! Route tables, one per surface, merged in [`router`].
//! `/cars/search` is a static segment and takes precedence over
//! `/cars/:brand_name`.

mod common;

pub use common::common_routes;

use crate::handlers::{brands, cars, models};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn brand_routes(state: AppState) -> Router {
    Router::new()
        .route("/car_brands", post(brands::create))
        .route(
            "/car_brands/:id",
            get(brands::read).put(brands::update).delete(brands::delete),
        )
        .with_state(state)
}

pub fn model_routes(state: AppState) -> Router {
    Router::new()
        .route("/car_models", post(models::create))
        .route(
            "/car_models/:id",
            get(models::read).put(models::update).delete(models::delete),
        )
        .with_state(state)
}

pub fn car_routes(state: AppState) -> Router {
    Router::new()
        .route("/cars/search", get(cars::search))
        .route("/cars/:brand_name", get(cars::by_brand))
        .with_state(state)
}

/// Full application router: entity surfaces, ops routes, request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(brand_routes(state.clone()))
        .merge(model_routes(state.clone()))
        .merge(car_routes(state))
        .layer(TraceLayer::new_for_http())
}
