//! Shared response bodies.
//!
//! Successful reads and writes return the entity, list, or composite as-is.
//! Operations with nothing to return reply with a [`MessageResponse`].

use serde::Serialize;
use showcase_db::models::media::EventMedia;

/// `{ "message": "..." }` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of `POST /file/upload/{directory}`.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    #[serde(rename = "type")]
    pub media_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    /// The media row created when the upload was attached to an event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<EventMedia>,
}
