//! Event model and DTO. Media attached to an event lives in [`super::media`].

use serde::{Deserialize, Serialize};
use showcase_core::types::{Date, DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::aggregate::Relation;
use crate::executor::PgQueryAs;
use crate::models::media::EventMedia;
use crate::resource::Resource;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub subtitle: Option<String>,
    pub date: Date,
    pub description: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EventInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub subtitle: Option<String>,
    #[validate(required(message = "Date is required"))]
    pub date: Option<Date>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

impl Resource for Event {
    type Input = EventInput;

    const NAME: &'static str = "Event";
    const TABLE: &'static str = "events";
    const COLUMNS: &'static [&'static str] = &["title", "subtitle", "date", "description"];
    const ORDER_BY: &'static str = "t.date DESC, t.id DESC";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &'q EventInput) -> PgQueryAs<'q, Self> {
        query
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(input.date)
            .bind(&input.description)
    }
}

/// Event → media, serialized under `media`.
pub struct EventWithMedia;

impl Relation for EventWithMedia {
    type Parent = Event;
    type Child = EventMedia;
    const FOREIGN_KEY: &'static str = "event_id";
    const FIELD: &'static str = "media";
}
