use axum::routing::get;
use axum::Router;
use showcase_db::models::service::{Service, ServiceCategory};

use crate::handlers::services;
use crate::routes::crud::crud_routes;
use crate::state::AppState;

/// Routes mounted at `/services`.
///
/// ```text
/// GET    /complete-data        -> complete_data
/// GET    /category/{id}        -> by_category
/// *      /categories[/{id}]    -> category CRUD
/// ```
///
/// Plus the standard CRUD routes for services.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/complete-data", get(services::complete_data))
        .route("/category/{id}", get(services::by_category))
        .nest("/categories", crud_routes::<ServiceCategory>())
        .merge(crud_routes::<Service>())
}
