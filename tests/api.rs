//! Router-level tests.
//!
//! The first group drives the router through `tower::ServiceExt::oneshot`
//! with a lazily-connected pool and never touches PostgreSQL: it covers the
//! ops routes and the extractor-level rejections that must fire before any
//! store access. The end-to-end group needs a live server and stays ignored
//! unless `TEST_DATABASE_URL` points at one.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use ucars::{ensure_tables, router, AppState};

fn lazy_app() -> Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/ucars_test")
        .expect("lazy pool");
    router(AppState { pool })
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_works_without_database() {
    let resp = lazy_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn version_reports_crate_name() {
    let resp = lazy_app()
        .oneshot(Request::get("/version").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["name"], "ucars");
}

#[tokio::test]
async fn create_brand_rejects_missing_name() {
    let resp = lazy_app()
        .oneshot(
            Request::post("/car_brands")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"logo":"toyota.png"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_brand_rejects_non_json_content_type() {
    let resp = lazy_app()
        .oneshot(
            Request::post("/car_brands")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from("name=Toyota"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn create_model_rejects_non_integer_brand_id() {
    let resp = lazy_app()
        .oneshot(
            Request::post("/car_models")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"Civic","car_brand_id":"one"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn brand_id_path_must_be_an_integer() {
    let resp = lazy_app()
        .oneshot(Request::get("/car_brands/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_requires_keywords_param() {
    let resp = lazy_app()
        .oneshot(Request::get("/cars/search").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = lazy_app()
        .oneshot(Request::get("/garages").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- live-PostgreSQL end-to-end ---

async fn live_app() -> (Router, sqlx::PgPool) {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL not set");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to test database");
    ensure_tables(&pool).await.expect("ensure tables");
    (router(AppState { pool: pool.clone() }), pool)
}

fn unique_name(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

#[tokio::test]
#[ignore = "needs PostgreSQL; set TEST_DATABASE_URL and run with --ignored"]
async fn brand_and_model_round_trip() {
    let (app, _pool) = live_app().await;
    let brand_name = unique_name("Honda");

    // brand create, then read back by the returned id
    let (status, brand) = send_json(&app, "POST", "/car_brands", json!({"name": brand_name})).await;
    assert_eq!(status, StatusCode::OK);
    let brand_id = brand["id"].as_i64().unwrap();
    assert_eq!(brand["name"], brand_name.as_str());
    assert_eq!(brand["logo"], Value::Null);
    assert_eq!(brand["description"], Value::Null);

    let (status, read_back) = send(&app, "GET", &format!("/car_brands/{}", brand_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read_back, brand);

    // zero models: empty list, not a 404
    let (status, listed) = send(&app, "GET", &format!("/cars/{}", brand_name)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));

    // model create and brand-scoped listing
    let model_name = unique_name("Civic");
    let (status, model) = send_json(
        &app,
        "POST",
        "/car_models",
        json!({"name": model_name, "car_brand_id": brand_id}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let model_id = model["id"].as_i64().unwrap();

    let (status, listed) = send(&app, "GET", &format!("/cars/{}", brand_name)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([model]));

    // case-insensitive substring search
    let needle = model_name[2..8].to_uppercase();
    let (status, found) = send(&app, "GET", &format!("/cars/search?keywords={}", needle)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(found
        .as_array()
        .unwrap()
        .iter()
        .any(|m| m["id"].as_i64() == Some(model_id)));

    // full-replace update rewrites omitted optionals to null
    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/car_brands/{}", brand_id),
        json!({"name": brand_name, "logo": "h.png"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["logo"], "h.png");
    assert_eq!(updated["description"], Value::Null);

    // deleting the brand leaves the model behind, reference dangling
    let (status, confirmation) = send(&app, "DELETE", &format!("/car_brands/{}", brand_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(confirmation, json!({"message": "Car brand deleted"}));

    let (status, orphan) = send(&app, "GET", &format!("/car_models/{}", model_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orphan["car_brand_id"].as_i64(), Some(brand_id));

    // brand is gone: entity-named 404s
    let (status, body) = send(&app, "GET", &format!("/car_brands/{}", brand_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Car brand not found");

    let (status, body) = send(&app, "GET", &format!("/cars/{}", brand_name)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Car brand not found");

    // model cleanup path and its 404
    let (status, confirmation) = send(&app, "DELETE", &format!("/car_models/{}", model_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(confirmation, json!({"message": "Car model deleted"}));

    let (status, body) = send(&app, "GET", &format!("/car_models/{}", model_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Car model not found");
}

#[tokio::test]
#[ignore = "needs PostgreSQL; set TEST_DATABASE_URL and run with --ignored"]
async fn model_update_may_point_at_missing_brand() {
    let (app, _pool) = live_app().await;
    let brand_name = unique_name("Kia");

    let (_, brand) = send_json(&app, "POST", "/car_brands", json!({"name": brand_name})).await;
    let brand_id = brand["id"].as_i64().unwrap();
    let (_, model) = send_json(
        &app,
        "POST",
        "/car_models",
        json!({"name": unique_name("Rio"), "car_brand_id": brand_id}),
    )
    .await;
    let model_id = model["id"].as_i64().unwrap();

    // no application-layer existence check on the brand reference
    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/car_models/{}", model_id),
        json!({"name": model["name"], "car_brand_id": 999_999_999}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["car_brand_id"].as_i64(), Some(999_999_999));

    send(&app, "DELETE", &format!("/car_models/{}", model_id)).await;
    send(&app, "DELETE", &format!("/car_brands/{}", brand_id)).await;
}
