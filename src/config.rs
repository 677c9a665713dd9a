//! Environment-driven runtime configuration.

use crate::error::AppError;
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/ucars";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to local-dev
    /// defaults. `.env` loading happens in main before this is called.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
            .parse()
            .map_err(|e| AppError::BadRequest(format!("invalid BIND_ADDR: {}", e)))?;
        let max_connections = match std::env::var("MAX_CONNECTIONS") {
            Ok(v) => v
                .parse()
                .map_err(|e| AppError::BadRequest(format!("invalid MAX_CONNECTIONS: {}", e)))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };
        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let addr: SocketAddr = DEFAULT_BIND_ADDR.parse().unwrap();
        assert_eq!(addr.port(), 3000);
        assert!(DEFAULT_DATABASE_URL.starts_with("postgres://"));
    }
}
