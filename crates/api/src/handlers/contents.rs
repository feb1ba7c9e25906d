//! Section-level reads for about-page content.

use axum::extract::State;
use axum::Json;
use showcase_core::error::CoreError;
use showcase_db::models::content::Content;
use showcase_db::repositories::{ContentRepo, Repo};

use crate::error::{AppError, AppResult};
use crate::extract::{SectionParam, ValidPath};
use crate::state::AppState;

/// GET /api/contents/sections
pub async fn sections(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let sections = ContentRepo::sections(&state.db).await?;
    Ok(Json(sections))
}

/// GET /api/contents/section/{section}
pub async fn by_section(
    State(state): State<AppState>,
    ValidPath(SectionParam { section }): ValidPath<SectionParam>,
) -> AppResult<Json<Vec<Content>>> {
    let content = Repo::<Content>::list_by(&state.db, "section", section.clone()).await?;
    if content.is_empty() {
        return Err(AppError::Core(CoreError::Missing(format!(
            "No content found for section: {section}"
        ))));
    }
    Ok(Json(content))
}
