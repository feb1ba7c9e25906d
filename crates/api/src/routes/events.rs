use axum::routing::{get, put};
use axum::Router;
use showcase_db::models::event::Event;

use crate::handlers::{crud, events};
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /                          -> list (with media)
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id (with media)
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete (cascades to media)
///
/// GET    /{id}/media                -> list_media
/// POST   /{id}/media                -> add_media
/// PUT    /{id}/media/{media_id}     -> update_media
/// DELETE /{id}/media/{media_id}     -> delete_media
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list).post(crud::create::<Event>))
        .route(
            "/{id}",
            get(events::get_by_id)
                .put(crud::update::<Event>)
                .delete(crud::delete::<Event>),
        )
        .route(
            "/{id}/media",
            get(events::list_media).post(events::add_media),
        )
        .route(
            "/{id}/media/{media_id}",
            put(events::update_media).delete(events::delete_media),
        )
}
