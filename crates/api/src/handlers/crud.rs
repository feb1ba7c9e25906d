//! Generic handlers shared by every entity.
//!
//! Instantiated per entity in the route modules, e.g. `get(crud::list::<Partner>)`.
//! The status mapping lives here once:
//!
//! - absent id → 404
//! - body referencing a missing parent row → 400 with the parent's message
//! - delete blocked by dependent rows → 400
//! - delete that removes nothing after the existence check → 500

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use showcase_core::error::CoreError;
use showcase_core::types::DbId;
use showcase_db::repositories::{row_exists, Repo};
use showcase_db::resource::Resource;
use showcase_db::Db;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{IdParam, ValidPath, ValidatedJson};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// `NotFound` for an entity id.
pub fn not_found<R: Resource>(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: R::NAME,
        id,
    })
}

/// Fail with 404 unless a row with this id exists.
pub async fn ensure_exists<R: Resource>(db: &Db, id: DbId) -> AppResult<()> {
    if Repo::<R>::exists(db, id).await? {
        Ok(())
    } else {
        Err(not_found::<R>(id))
    }
}

/// Fail with 400 if the input references a parent row that does not exist.
pub async fn ensure_parents<R: Resource>(db: &Db, input: &R::Input) -> AppResult<()> {
    for parent in R::parents(input) {
        if !row_exists(db, parent.table, parent.id).await? {
            return Err(AppError::Core(CoreError::BadRequest(parent.message.into())));
        }
    }
    Ok(())
}

/// GET /
pub async fn list<R: Resource>(State(state): State<AppState>) -> AppResult<Json<Vec<R>>> {
    let rows = Repo::<R>::list(&state.db).await?;
    Ok(Json(rows))
}

/// GET /{id}
pub async fn get_by_id<R: Resource>(
    State(state): State<AppState>,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
) -> AppResult<Json<R>> {
    let row = Repo::<R>::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;
    Ok(Json(row))
}

/// POST /
pub async fn create<R>(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(input): ValidatedJson<R::Input>,
) -> AppResult<(StatusCode, Json<R>)>
where
    R: Resource,
    R::Input: DeserializeOwned + Validate,
{
    ensure_parents::<R>(&state.db, &input).await?;
    let row = Repo::<R>::create(&state.db, &input).await?;
    tracing::info!(entity = R::NAME, id = row.id(), user_id = user.user_id, "Created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /{id}
pub async fn update<R>(
    State(state): State<AppState>,
    user: AuthUser,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
    ValidatedJson(input): ValidatedJson<R::Input>,
) -> AppResult<Json<R>>
where
    R: Resource,
    R::Input: DeserializeOwned + Validate,
{
    ensure_exists::<R>(&state.db, id).await?;
    ensure_parents::<R>(&state.db, &input).await?;
    let row = Repo::<R>::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;
    tracing::info!(entity = R::NAME, id, user_id = user.user_id, "Updated");
    Ok(Json(row))
}

/// DELETE /{id}
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    user: AuthUser,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
) -> AppResult<Json<MessageResponse>> {
    ensure_exists::<R>(&state.db, id).await?;

    if let Some(message) = Repo::<R>::blocking_dependent(&state.db, id).await? {
        return Err(AppError::Core(CoreError::Conflict(message.into())));
    }

    if !Repo::<R>::delete(&state.db, id).await? {
        return Err(AppError::InternalError(format!(
            "Failed to delete {} with ID {id}: no row removed",
            R::NAME
        )));
    }

    tracing::info!(entity = R::NAME, id, user_id = user.user_id, "Deleted");
    Ok(Json(MessageResponse::new(format!(
        "{} with ID {id} successfully deleted",
        R::NAME
    ))))
}
