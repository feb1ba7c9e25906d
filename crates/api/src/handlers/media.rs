//! Media lookups across all events. CRUD goes through [`super::crud`].

use axum::extract::State;
use axum::Json;
use showcase_db::models::media::EventMedia;
use showcase_db::repositories::Repo;

use crate::error::AppResult;
use crate::extract::{MediaTypeParam, SearchParams, ValidPath, ValidQuery};
use crate::state::AppState;

/// GET /api/media/search?term=...
///
/// Matches media title, caption, and the owning event's title.
pub async fn search(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<SearchParams>,
) -> AppResult<Json<Vec<EventMedia>>> {
    let media = Repo::<EventMedia>::search(&state.db, &params.term).await?;
    Ok(Json(media))
}

/// GET /api/media/type/{type}
pub async fn by_type(
    State(state): State<AppState>,
    ValidPath(MediaTypeParam { media_type }): ValidPath<MediaTypeParam>,
) -> AppResult<Json<Vec<EventMedia>>> {
    let media = Repo::<EventMedia>::list_by(&state.db, "type", media_type).await?;
    Ok(Json(media))
}
