//! Product-catalogue reads beyond plain CRUD.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use showcase_db::aggregate::{self, Composite};
use showcase_db::models::product::{CategoryWithProducts, Product, ProductCategory};

use crate::error::AppResult;
use crate::extract::{IdParam, ValidPath};
use crate::handlers::crud::ensure_exists;
use crate::state::AppState;

/// Every category with its products.
#[derive(Serialize)]
pub struct ProductCatalogue {
    pub categories: Vec<Composite<CategoryWithProducts>>,
}

/// GET /api/products/categories/{id}/products
pub async fn by_category(
    State(state): State<AppState>,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
) -> AppResult<Json<Vec<Product>>> {
    ensure_exists::<ProductCategory>(&state.db, id).await?;
    let products = aggregate::children_of::<CategoryWithProducts>(&state.db, id).await?;
    Ok(Json(products))
}

/// GET /api/products/complete-data
pub async fn complete_data(State(state): State<AppState>) -> AppResult<Json<ProductCatalogue>> {
    let categories = aggregate::load_all::<CategoryWithProducts>(&state.db).await?;
    Ok(Json(ProductCatalogue { categories }))
}
