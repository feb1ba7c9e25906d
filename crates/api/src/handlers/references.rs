use axum::extract::State;
use axum::Json;
use showcase_db::models::reference::{ClientReference, ReferencesOverview};
use showcase_db::repositories::Repo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/references/featured
pub async fn featured(State(state): State<AppState>) -> AppResult<Json<Vec<ClientReference>>> {
    let references = Repo::<ClientReference>::list_by(&state.db, "is_featured", true).await?;
    Ok(Json(references))
}

/// GET /api/references/complete-data
pub async fn complete_data(State(state): State<AppState>) -> AppResult<Json<ReferencesOverview>> {
    let references = Repo::<ClientReference>::list(&state.db).await?;
    let featured_references =
        Repo::<ClientReference>::list_by(&state.db, "is_featured", true).await?;
    Ok(Json(ReferencesOverview {
        references,
        featured_references,
    }))
}
