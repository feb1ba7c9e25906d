use axum::routing::get;
use axum::Router;
use showcase_db::models::product::{Product, ProductCategory};

use crate::handlers::products;
use crate::routes::crud::crud_routes;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /complete-data                 -> complete_data
///
/// GET    /categories                    -> list categories
/// POST   /categories                    -> create category
/// GET    /categories/{id}               -> get category
/// PUT    /categories/{id}               -> update category
/// DELETE /categories/{id}               -> delete category (blocked by products)
/// GET    /categories/{id}/products      -> by_category
/// ```
///
/// Plus the standard CRUD routes for products.
pub fn router() -> Router<AppState> {
    let category_routes = crud_routes::<ProductCategory>()
        .route("/{id}/products", get(products::by_category));

    Router::new()
        .route("/complete-data", get(products::complete_data))
        .nest("/categories", category_routes)
        .merge(crud_routes::<Product>())
}
