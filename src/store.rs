//! Database bootstrap: CREATE DATABASE and idempotent schema DDL.

use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Schema DDL, applied in order at startup. All statements are idempotent.
/// `car_brand_id` carries no FOREIGN KEY: deleting a brand leaves its models
/// in place with a dangling reference.
const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS car_brands (
        id SERIAL PRIMARY KEY,
        name VARCHAR(50) NOT NULL,
        logo VARCHAR(50),
        description VARCHAR(255)
    )
    "#,
    "CREATE UNIQUE INDEX IF NOT EXISTS car_brands_name_key ON car_brands (name)",
    r#"
    CREATE TABLE IF NOT EXISTS car_models (
        id SERIAL PRIMARY KEY,
        name VARCHAR(50) NOT NULL,
        car_brand_id INTEGER NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS car_models_name_idx ON car_models (name)",
    "CREATE INDEX IF NOT EXISTS car_models_brand_idx ON car_models (car_brand_id)",
];

/// Create the `car_brands` and `car_models` tables and their indexes if missing.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for ddl in DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}
