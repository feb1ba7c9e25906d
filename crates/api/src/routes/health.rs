//! `GET /health`, mounted at the root beside `/api` and `/uploads`.
//!
//! Always answers 200; a failed `SELECT 1` only downgrades the status.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

impl ServiceStatus {
    fn from_db(db_healthy: bool) -> Self {
        if db_healthy {
            Self::Ok
        } else {
            Self::Degraded
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    fn new(db_healthy: bool) -> Self {
        Self {
            status: ServiceStatus::from_db(db_healthy),
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match showcase_db::health_check(state.db.pool()).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };
    Json(HealthReport::new(db_healthy))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
