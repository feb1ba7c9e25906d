//! File-upload boundary: store uploads on disk and optionally attach them
//! to an event as media.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use showcase_core::error::CoreError;
use showcase_core::types::DbId;
use showcase_core::upload;
use showcase_db::models::event::Event;
use showcase_db::models::media::{EventMedia, MediaFields};
use showcase_db::repositories::{MediaRepo, Repo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{DirectoryParam, ValidPath, ValidatedJson};
use crate::handlers::crud::ensure_exists;
use crate::middleware::auth::AuthUser;
use crate::response::{MessageResponse, UploadResponse};
use crate::state::AppState;

/// Body of `DELETE /api/file/media`.
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteMediaRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Directory is required"))]
    pub directory: String,
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError::Core(CoreError::BadRequest(message.into()))
}

struct UploadedFile {
    filename: String,
    content_type: Option<String>,
    data: Vec<u8>,
}

/// POST /api/file/upload/{directory}
///
/// Multipart form with a `file` field and a `parent_id` field. A
/// `parent_id` of 0 stores the file without creating a media row.
pub async fn upload(
    State(state): State<AppState>,
    user: AuthUser,
    ValidPath(DirectoryParam { directory }): ValidPath<DirectoryParam>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let base_url = state
        .config
        .base_url
        .clone()
        .ok_or_else(|| AppError::InternalError("BASE_URL is not configured".into()))?;
    upload::validate_directory(&directory)?;

    let mut file: Option<UploadedFile> = None;
    let mut parent_id: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(e.body_text()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| bad_request(e.body_text()))?;
                file = Some(UploadedFile {
                    filename,
                    content_type,
                    data: data.to_vec(),
                });
            }
            "parent_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| bad_request(e.body_text()))?;
                parent_id = Some(text);
            }
            _ => {} // ignore unknown fields
        }
    }

    let file = file.ok_or_else(|| bad_request("No file uploaded"))?;
    let parent_id: DbId = parent_id
        .as_deref()
        .map(str::trim)
        .and_then(|v| v.parse().ok())
        .filter(|id| *id >= 0)
        .ok_or_else(|| bad_request("parent_id is required"))?;

    let media_type = upload::check_upload(&file.filename, file.data.len())?;

    // Check the event before writing so a bad id leaves no orphan file.
    if parent_id != 0 {
        ensure_exists::<Event>(&state.db, parent_id).await?;
    }

    let target_dir = state.config.upload_dir.join(&directory);
    tokio::fs::create_dir_all(&target_dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let stored = upload::stored_filename(chrono::Utc::now().timestamp_millis(), &file.filename);
    tokio::fs::write(target_dir.join(&stored), &file.data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let url = upload::public_url(&base_url, &directory, &stored);
    tracing::info!(%url, media_type, bytes = file.data.len(), user_id = user.user_id, "File uploaded");

    if parent_id == 0 {
        return Ok((
            StatusCode::OK,
            Json(UploadResponse {
                url,
                media_type,
                message: Some("File uploaded but not linked to any record."),
                media: None,
            }),
        ));
    }

    let fields = MediaFields {
        url: url.clone(),
        media_type: media_type.to_string(),
        title: Some(file.filename),
        caption: None,
        thumbnail_url: None,
        duration: None,
        size: i64::try_from(file.data.len()).ok(),
        mime_type: file.content_type,
    };
    let media = Repo::<EventMedia>::create(&state.db, &fields.for_event(parent_id)).await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            url,
            media_type,
            message: None,
            media: Some(media),
        }),
    ))
}

/// DELETE /api/file/media
///
/// Removes the stored file and every media row pointing at its URL. A file
/// already missing from disk is logged and skipped.
pub async fn delete_media(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(input): ValidatedJson<DeleteMediaRequest>,
) -> AppResult<Json<MessageResponse>> {
    upload::validate_directory(&input.directory)?;

    let stored = input.url.rsplit('/').next().unwrap_or_default();
    if stored.is_empty() || upload::sanitize_filename(stored) != stored {
        return Err(bad_request("URL does not point to an uploaded file"));
    }

    let path = state.config.upload_dir.join(&input.directory).join(stored);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Uploaded file already missing");
        }
        Err(e) => return Err(AppError::InternalError(e.to_string())),
    }

    let removed = MediaRepo::delete_by_url(&state.db, &input.url).await?;
    tracing::info!(url = %input.url, rows = removed, user_id = user.user_id, "Media file deleted");

    Ok(Json(MessageResponse::new("Media deleted successfully")))
}
