use axum::routing::get;
use axum::Router;
use showcase_db::models::news::News;

use crate::handlers::news;
use crate::routes::crud::crud_routes;
use crate::state::AppState;

/// Routes mounted at `/news`.
///
/// ```text
/// GET    /featured          -> featured
/// GET    /category/{id}     -> by_category
/// ```
///
/// Plus the standard CRUD routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/featured", get(news::featured))
        .route("/category/{id}", get(news::by_category))
        .merge(crud_routes::<News>())
}
