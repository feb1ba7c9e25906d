//! Handlers for `/events`: events are always returned with their media,
//! and media can be managed under the owning event.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use showcase_db::aggregate::{self, Composite};
use showcase_db::models::event::{Event, EventWithMedia};
use showcase_db::models::media::{EventMedia, MediaFields};
use showcase_db::repositories::Repo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdParam, MediaPath, ValidPath, ValidatedJson};
use crate::handlers::crud::{ensure_exists, not_found};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/events
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Composite<EventWithMedia>>>> {
    let events = aggregate::load_all::<EventWithMedia>(&state.db).await?;
    Ok(Json(events))
}

/// GET /api/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
) -> AppResult<Json<Composite<EventWithMedia>>> {
    let event = aggregate::load_one::<EventWithMedia>(&state.db, id)
        .await?
        .ok_or_else(|| not_found::<Event>(id))?;
    Ok(Json(event))
}

/// GET /api/events/{id}/media
pub async fn list_media(
    State(state): State<AppState>,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
) -> AppResult<Json<Vec<EventMedia>>> {
    ensure_exists::<Event>(&state.db, id).await?;
    let media = aggregate::children_of::<EventWithMedia>(&state.db, id).await?;
    Ok(Json(media))
}

/// POST /api/events/{id}/media
pub async fn add_media(
    State(state): State<AppState>,
    user: AuthUser,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
    ValidatedJson(fields): ValidatedJson<MediaFields>,
) -> AppResult<(StatusCode, Json<EventMedia>)> {
    ensure_exists::<Event>(&state.db, id).await?;
    let media = Repo::<EventMedia>::create(&state.db, &fields.for_event(id)).await?;
    tracing::info!(event_id = id, media_id = media.id, user_id = user.user_id, "Media added to event");
    Ok((StatusCode::CREATED, Json(media)))
}

/// PUT /api/events/{id}/media/{media_id}
pub async fn update_media(
    State(state): State<AppState>,
    user: AuthUser,
    ValidPath(path): ValidPath<MediaPath>,
    ValidatedJson(fields): ValidatedJson<MediaFields>,
) -> AppResult<Json<EventMedia>> {
    ensure_media_of_event(&state, &path).await?;
    let media = Repo::<EventMedia>::update(&state.db, path.media_id, &fields.for_event(path.id))
        .await?
        .ok_or_else(|| not_found::<EventMedia>(path.media_id))?;
    tracing::info!(event_id = path.id, media_id = media.id, user_id = user.user_id, "Event media updated");
    Ok(Json(media))
}

/// DELETE /api/events/{id}/media/{media_id}
pub async fn delete_media(
    State(state): State<AppState>,
    user: AuthUser,
    ValidPath(path): ValidPath<MediaPath>,
) -> AppResult<Json<MessageResponse>> {
    ensure_media_of_event(&state, &path).await?;
    if !Repo::<EventMedia>::delete(&state.db, path.media_id).await? {
        return Err(AppError::InternalError(format!(
            "Failed to delete media with ID {}: no row removed",
            path.media_id
        )));
    }
    tracing::info!(event_id = path.id, media_id = path.media_id, user_id = user.user_id, "Event media deleted");
    Ok(Json(MessageResponse::new(format!(
        "Media with ID {} successfully deleted",
        path.media_id
    ))))
}

/// 404 unless the event exists and owns the media row.
async fn ensure_media_of_event(state: &AppState, path: &MediaPath) -> AppResult<()> {
    ensure_exists::<Event>(&state.db, path.id).await?;
    match Repo::<EventMedia>::find_by_id(&state.db, path.media_id).await? {
        Some(media) if media.event_id == path.id => Ok(()),
        _ => Err(not_found::<EventMedia>(path.media_id)),
    }
}
