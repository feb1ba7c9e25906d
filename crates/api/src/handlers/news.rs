//! News-specific reads. CRUD goes through [`super::crud`].

use axum::extract::State;
use axum::Json;
use showcase_db::models::news::News;
use showcase_db::repositories::Repo;

use crate::error::AppResult;
use crate::extract::{IdParam, ValidPath};
use crate::state::AppState;

/// GET /api/news/featured
pub async fn featured(State(state): State<AppState>) -> AppResult<Json<Vec<News>>> {
    let news = Repo::<News>::list_by(&state.db, "is_featured", true).await?;
    Ok(Json(news))
}

/// GET /api/news/category/{id}
pub async fn by_category(
    State(state): State<AppState>,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
) -> AppResult<Json<Vec<News>>> {
    let news = Repo::<News>::list_by(&state.db, "category_id", id).await?;
    Ok(Json(news))
}
