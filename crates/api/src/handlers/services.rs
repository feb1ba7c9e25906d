//! Handlers for `/services` reads beyond plain CRUD.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use showcase_db::aggregate::{self, Composite};
use showcase_db::models::service::{CategoryWithServices, Service};

use crate::error::AppResult;
use crate::extract::{IdParam, ValidPath};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ServiceCatalogue {
    pub categories: Vec<Composite<CategoryWithServices>>,
}

/// GET /api/services/category/{id}
///
/// An unknown category simply has no services.
pub async fn by_category(
    State(state): State<AppState>,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
) -> AppResult<Json<Vec<Service>>> {
    let services = aggregate::children_of::<CategoryWithServices>(&state.db, id).await?;
    Ok(Json(services))
}

/// GET /api/services/complete-data
pub async fn complete_data(State(state): State<AppState>) -> AppResult<Json<ServiceCatalogue>> {
    let categories = aggregate::load_all::<CategoryWithServices>(&state.db).await?;
    Ok(Json(ServiceCatalogue { categories }))
}
