use axum::routing::get;
use axum::Router;
use showcase_db::models::content::Content;

use crate::handlers::contents;
use crate::routes::crud::crud_routes;
use crate::state::AppState;

/// Routes mounted at `/contents`.
///
/// ```text
/// GET    /sections              -> sections
/// GET    /section/{section}     -> by_section
/// ```
///
/// Plus the standard CRUD routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sections", get(contents::sections))
        .route("/section/{section}", get(contents::by_section))
        .merge(crud_routes::<Content>())
}
