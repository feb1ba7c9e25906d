use axum::routing::get;
use axum::Router;
use showcase_db::models::media::EventMedia;

use crate::handlers::media;
use crate::routes::crud::crud_routes;
use crate::state::AppState;

/// Routes mounted at `/media`.
///
/// ```text
/// GET    /search?term=           -> search
/// GET    /type/{type}            -> by_type
/// ```
///
/// Plus the standard CRUD routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(media::search))
        .route("/type/{type}", get(media::by_type))
        .merge(crud_routes::<EventMedia>())
}
