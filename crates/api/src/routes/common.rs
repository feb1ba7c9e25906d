use axum::routing::get;
use axum::Router;

use crate::handlers::common;
use crate::state::AppState;

/// Routes mounted at `/common`.
///
/// ```text
/// GET    /user/{id}    -> get_user (auth required)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/user/{id}", get(common::get_user))
}
