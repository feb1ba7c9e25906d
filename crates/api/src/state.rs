use std::sync::Arc;

use showcase_db::Db;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool handle and config are both shared.
#[derive(Clone)]
pub struct AppState {
    /// Query executor over the process-wide connection pool.
    pub db: Db,
    pub config: Arc<ServerConfig>,
}
