//! Handlers for `/solutions` reads that include bundled products.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use showcase_db::aggregate::{self, Composite};
use showcase_db::models::solution::{Solution, SolutionProduct, SolutionWithProducts};
use showcase_db::repositories::Repo;

use crate::error::AppResult;
use crate::extract::{BusinessLineParam, IdParam, ValidPath};
use crate::handlers::crud::{ensure_exists, not_found};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SolutionCatalogue {
    pub solutions: Vec<Composite<SolutionWithProducts>>,
}

/// GET /api/solutions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
) -> AppResult<Json<Composite<SolutionWithProducts>>> {
    let solution = aggregate::load_one::<SolutionWithProducts>(&state.db, id)
        .await?
        .ok_or_else(|| not_found::<Solution>(id))?;
    Ok(Json(solution))
}

/// GET /api/solutions/complete-data
pub async fn complete_data(State(state): State<AppState>) -> AppResult<Json<SolutionCatalogue>> {
    let solutions = aggregate::load_all::<SolutionWithProducts>(&state.db).await?;
    Ok(Json(SolutionCatalogue { solutions }))
}

/// GET /api/solutions/business-line/{business_line}
pub async fn by_business_line(
    State(state): State<AppState>,
    ValidPath(BusinessLineParam { business_line }): ValidPath<BusinessLineParam>,
) -> AppResult<Json<Vec<Solution>>> {
    let solutions = Repo::<Solution>::list_by(&state.db, "business_line", business_line).await?;
    Ok(Json(solutions))
}

/// GET /api/solutions/{id}/products
pub async fn products_of(
    State(state): State<AppState>,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
) -> AppResult<Json<Vec<SolutionProduct>>> {
    ensure_exists::<Solution>(&state.db, id).await?;
    let products = aggregate::children_of::<SolutionWithProducts>(&state.db, id).await?;
    Ok(Json(products))
}
