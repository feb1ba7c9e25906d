use axum::Router;
use showcase_db::models::partner::Partner;

use crate::routes::crud::crud_routes;
use crate::state::AppState;

/// Routes mounted at `/partners`: standard CRUD only.
pub fn router() -> Router<AppState> {
    crud_routes::<Partner>()
}
