use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Default request body ceiling for JSON endpoints: 10 MiB.
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3015`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum accepted request body for non-upload routes.
    pub body_limit_bytes: usize,
    /// Directory uploads are written to and served from at `/uploads`.
    pub upload_dir: PathBuf,
    /// Public origin used to build upload URLs. Uploads fail without it.
    pub base_url: Option<String>,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3015`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `BODY_LIMIT_BYTES`     | `10485760`                 |
    /// | `UPLOAD_DIR`           | `uploads`                  |
    /// | `BASE_URL`             | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3015".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let body_limit_bytes: usize = std::env::var("BODY_LIMIT_BYTES")
            .map(|v| v.parse().expect("BODY_LIMIT_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_BODY_LIMIT_BYTES);

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        let base_url = std::env::var("BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            body_limit_bytes,
            upload_dir,
            base_url,
            jwt: JwtConfig::from_env(),
        }
    }
}

/// Database pool configuration.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// How long a request waits for a free connection before failing.
    pub acquire_timeout_secs: u64,
    /// Log every executed statement at debug level.
    pub query_log: bool,
}

impl DbConfig {
    /// | Env Var                   | Default      |
    /// |---------------------------|--------------|
    /// | `DATABASE_URL`            | **required** |
    /// | `DB_POOL_MAX`             | `10`         |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`         |
    /// | `QUERY_LOG`               | `false`      |
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let max_connections: u32 = std::env::var("DB_POOL_MAX")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DB_POOL_MAX must be a valid u32");

        let acquire_timeout_secs: u64 = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64");

        let query_log = std::env::var("QUERY_LOG")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            database_url,
            max_connections,
            acquire_timeout_secs,
            query_log,
        }
    }
}
