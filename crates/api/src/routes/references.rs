use axum::routing::get;
use axum::Router;
use showcase_db::models::reference::ClientReference;

use crate::handlers::references;
use crate::routes::crud::crud_routes;
use crate::state::AppState;

/// Routes mounted at `/references`.
///
/// ```text
/// GET    /featured         -> featured
/// GET    /complete-data    -> complete_data
/// ```
///
/// Plus the standard CRUD routes. Static segments win over `{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/featured", get(references::featured))
        .route("/complete-data", get(references::complete_data))
        .merge(crud_routes::<ClientReference>())
}
