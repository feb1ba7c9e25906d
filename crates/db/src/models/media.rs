//! Event media model and DTOs.
//!
//! Media rows always belong to an event; deleting the event removes them.

use serde::{Deserialize, Serialize};
use showcase_core::media::validate_media_type;
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::executor::PgQueryAs;
use crate::resource::{ParentRef, Resource};

/// A row from `event_media`, joined with the owning event's title.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventMedia {
    pub id: DbId,
    pub event_id: DbId,
    pub url: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub media_type: String,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub thumbnail_url: Option<String>,
    /// Clip length in seconds (videos only).
    pub duration: Option<i32>,
    /// File size in bytes.
    pub size: Option<i64>,
    pub mime_type: Option<String>,
    pub event_title: Option<String>,
    pub created_at: Timestamp,
}

/// Media body for `/media` routes, where the event id travels in the body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MediaInput {
    #[serde(default)]
    #[validate(range(min = 1, message = "Event ID must be a positive integer"))]
    pub event_id: DbId,
    #[serde(flatten)]
    #[validate(nested)]
    pub fields: MediaFields,
}

/// Media body for `/events/{id}/media` routes, where the event id is in the path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MediaFields {
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
    #[serde(rename = "type", default)]
    #[validate(custom(function = "validate_media_type"))]
    pub media_type: String,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub thumbnail_url: Option<String>,
    #[validate(range(min = 0, message = "Duration must be a non-negative integer"))]
    pub duration: Option<i32>,
    #[validate(range(min = 0, message = "Size must be a non-negative integer"))]
    pub size: Option<i64>,
    pub mime_type: Option<String>,
}

impl MediaFields {
    /// Attach these fields to an event.
    pub fn for_event(self, event_id: DbId) -> MediaInput {
        MediaInput {
            event_id,
            fields: self,
        }
    }
}

impl Resource for EventMedia {
    type Input = MediaInput;

    const NAME: &'static str = "Media";
    const TABLE: &'static str = "event_media";
    const COLUMNS: &'static [&'static str] = &[
        "event_id",
        "url",
        "type",
        "title",
        "caption",
        "thumbnail_url",
        "duration",
        "size",
        "mime_type",
    ];
    const PROJECTION: &'static str = "t.*, e.title AS event_title";
    const JOINS: &'static str = "LEFT JOIN events e ON e.id = t.event_id";
    const ORDER_BY: &'static str = "t.created_at DESC, t.id DESC";
    const SEARCH_COLUMNS: &'static [&'static str] = &["t.title", "t.caption", "e.title"];

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &'q MediaInput) -> PgQueryAs<'q, Self> {
        let f = &input.fields;
        query
            .bind(input.event_id)
            .bind(&f.url)
            .bind(&f.media_type)
            .bind(&f.title)
            .bind(&f.caption)
            .bind(&f.thumbnail_url)
            .bind(f.duration)
            .bind(f.size)
            .bind(&f.mime_type)
    }

    fn parents(input: &MediaInput) -> Vec<ParentRef> {
        vec![ParentRef {
            table: "events",
            id: input.event_id,
            message: "Invalid event",
        }]
    }
}
