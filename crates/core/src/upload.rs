//! Upload policy: which files are accepted, how large they may be, and
//! where they land on disk.

use std::path::Path;

use crate::error::CoreError;
use crate::media::{MEDIA_IMAGE, MEDIA_VIDEO};

/// Accepted image extensions (lowercase, without the dot).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Accepted video extensions (lowercase, without the dot).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi"];

/// Image size ceiling: 200 KB.
pub const MAX_IMAGE_BYTES: usize = 200 * 1024;

/// Video size ceiling: 20 MB.
pub const MAX_VIDEO_BYTES: usize = 20 * 1024 * 1024;

/// Longest accepted upload directory name.
pub const MAX_DIRECTORY_LEN: usize = 64;

/// Classify a file by extension, returning its media type.
pub fn media_type_for(filename: &str) -> Result<&'static str, CoreError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(MEDIA_IMAGE)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Ok(MEDIA_VIDEO)
    } else {
        Err(CoreError::BadRequest("Invalid file type".into()))
    }
}

/// Size ceiling in bytes for a media type.
pub fn size_limit(media_type: &str) -> usize {
    if media_type == MEDIA_VIDEO {
        MAX_VIDEO_BYTES
    } else {
        MAX_IMAGE_BYTES
    }
}

/// Check extension and size together, returning the media type on success.
pub fn check_upload(filename: &str, len: usize) -> Result<&'static str, CoreError> {
    let media_type = media_type_for(filename)?;
    if len > size_limit(media_type) {
        return Err(CoreError::BadRequest("File size exceeds limit".into()));
    }
    Ok(media_type)
}

/// Validate the `{directory}` path segment of an upload.
///
/// Only ASCII letters, digits, `-` and `_` are allowed so the value can be
/// joined onto the upload root without escaping it.
pub fn validate_directory(name: &str) -> Result<(), CoreError> {
    let valid = !name.is_empty()
        && name.len() <= MAX_DIRECTORY_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(CoreError::BadRequest(format!(
            "Invalid upload directory: '{name}'. Use letters, digits, '-' or '_'"
        )))
    }
}

/// Reduce a client-supplied filename to a safe final path component.
///
/// Drops any directory part, then replaces every character outside
/// `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_filename(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Name a stored upload: `{unix_millis}-{sanitized original name}`.
pub fn stored_filename(unix_millis: i64, original: &str) -> String {
    format!("{unix_millis}-{}", sanitize_filename(original))
}

/// Public URL of a stored upload.
pub fn public_url(base_url: &str, directory: &str, filename: &str) -> String {
    format!(
        "{}/uploads/{directory}/{filename}",
        base_url.trim_end_matches('/')
    )
}
