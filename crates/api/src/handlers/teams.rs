//! Handlers for the team page: the singleton intro section and the
//! combined payload. Members and gallery use the generic handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use showcase_core::error::CoreError;
use showcase_db::models::team::{
    GalleryImage, TeamMember, TeamOverview, TeamSection, TeamSectionInput,
};
use showcase_db::repositories::Repo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

async fn first_section(state: &AppState) -> AppResult<Option<TeamSection>> {
    let sections = Repo::<TeamSection>::list(&state.db).await?;
    Ok(sections.into_iter().next())
}

fn section_exists() -> AppError {
    AppError::Core(CoreError::Conflict(
        "Team section already exists. Use PUT to update.".into(),
    ))
}

/// GET /api/teams/section
pub async fn get_section(State(state): State<AppState>) -> AppResult<Json<TeamSection>> {
    let section = first_section(&state)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Missing("Team section not found".into())))?;
    Ok(Json(section))
}

/// POST /api/teams/section
///
/// Only one section may exist; later edits go through `PUT /section/{id}`.
/// The singleton index settles concurrent creates; a lost race gets the
/// same rejection as a plain second create.
pub async fn create_section(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(input): ValidatedJson<TeamSectionInput>,
) -> AppResult<(StatusCode, Json<TeamSection>)> {
    if first_section(&state).await?.is_some() {
        return Err(section_exists());
    }
    let section = Repo::<TeamSection>::create(&state.db, &input)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                section_exists()
            } else {
                AppError::Query(e)
            }
        })?;
    tracing::info!(id = section.id, user_id = user.user_id, "Team section created");
    Ok((StatusCode::CREATED, Json(section)))
}

/// GET /api/teams/complete
pub async fn complete(State(state): State<AppState>) -> AppResult<Json<TeamOverview>> {
    let section = first_section(&state).await?;
    let members = Repo::<TeamMember>::list(&state.db).await?;
    let gallery = Repo::<GalleryImage>::list(&state.db).await?;
    Ok(Json(TeamOverview {
        section,
        members,
        gallery,
    }))
}
