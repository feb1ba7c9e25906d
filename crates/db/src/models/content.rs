//! Free-form "about" page content, grouped by section.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::executor::PgQueryAs;
use crate::resource::Resource;

/// A row from `about_content`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Content {
    pub id: DbId,
    pub section: String,
    pub title: Option<String>,
    pub content: String,
    /// Display position within the page; lower first.
    pub order: i32,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContentInput {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Section is required (at most 100 characters)"))]
    pub section: String,
    pub title: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    /// Defaults to 0 when omitted.
    #[validate(range(min = 0, message = "Order must be a non-negative integer"))]
    pub order: Option<i32>,
}

impl Resource for Content {
    type Input = ContentInput;

    const NAME: &'static str = "Content";
    const TABLE: &'static str = "about_content";
    const COLUMNS: &'static [&'static str] = &["section", "title", "content", "order"];
    const ORDER_BY: &'static str = "t.\"order\", t.id";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &'q ContentInput) -> PgQueryAs<'q, Self> {
        query
            .bind(&input.section)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.order.unwrap_or(0))
    }
}
