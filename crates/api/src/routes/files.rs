use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, post};
use axum::Router;
use showcase_core::upload::MAX_VIDEO_BYTES;

use crate::handlers::files;
use crate::state::AppState;

/// Multipart framing allowance on top of the largest accepted file.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Routes mounted at `/file`.
///
/// ```text
/// POST   /upload/{directory}    -> upload (multipart: file, parent_id)
/// DELETE /media                 -> delete_media
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/upload/{directory}",
            post(files::upload)
                .layer(DefaultBodyLimit::max(MAX_VIDEO_BYTES + MULTIPART_OVERHEAD_BYTES)),
        )
        .route("/media", delete(files::delete_media))
}
