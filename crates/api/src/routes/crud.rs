//! The five standard routes, instantiated per entity.

use axum::routing::get;
use axum::Router;
use serde::de::DeserializeOwned;
use showcase_db::resource::Resource;
use validator::Validate;

use crate::handlers::crud;
use crate::state::AppState;

/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn crud_routes<R>() -> Router<AppState>
where
    R: Resource,
    R::Input: DeserializeOwned + Validate,
{
    Router::new()
        .route("/", get(crud::list::<R>).post(crud::create::<R>))
        .route(
            "/{id}",
            get(crud::get_by_id::<R>)
                .put(crud::update::<R>)
                .delete(crud::delete::<R>),
        )
}
