use axum::routing::get;
use axum::Router;
use showcase_db::models::solution::{Solution, SolutionProduct};

use crate::handlers::{crud, solutions};
use crate::routes::crud::crud_routes;
use crate::state::AppState;

/// Routes mounted at `/solutions`.
///
/// ```text
/// GET    /                                -> list
/// POST   /                                -> create
/// GET    /{id}                            -> get_by_id (with products)
/// PUT    /{id}                            -> update
/// DELETE /{id}                            -> delete (cascades to products)
/// GET    /{id}/products                   -> products_of
///
/// GET    /complete-data                   -> complete_data
/// GET    /business-line/{business_line}   -> by_business_line
///
/// GET    /products                        -> list solution products
/// POST   /products                        -> create solution product
/// GET    /products/{id}                   -> get solution product
/// PUT    /products/{id}                   -> update solution product
/// DELETE /products/{id}                   -> delete solution product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(crud::list::<Solution>).post(crud::create::<Solution>))
        .route("/complete-data", get(solutions::complete_data))
        .route(
            "/business-line/{business_line}",
            get(solutions::by_business_line),
        )
        .nest("/products", crud_routes::<SolutionProduct>())
        .route(
            "/{id}",
            get(solutions::get_by_id)
                .put(crud::update::<Solution>)
                .delete(crud::delete::<Solution>),
        )
        .route("/{id}/products", get(solutions::products_of))
}
