//! News article model and DTO.

use serde::{Deserialize, Serialize};
use showcase_core::types::{Date, DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::executor::PgQueryAs;
use crate::resource::{ParentRef, Resource};

/// A row from `news`, joined with its service category name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct News {
    pub id: DbId,
    pub title: String,
    pub subtitle: String,
    pub publish_date: Date,
    pub is_featured: bool,
    pub content: String,
    pub image_url: Option<String>,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewsInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Subtitle is required"))]
    pub subtitle: String,
    #[validate(required(message = "Publish date is required"))]
    pub publish_date: Option<Date>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    pub image_url: Option<String>,
    #[validate(range(min = 1, message = "Category ID must be a positive integer"))]
    pub category_id: Option<DbId>,
}

impl Resource for News {
    type Input = NewsInput;

    const NAME: &'static str = "News";
    const TABLE: &'static str = "news";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "subtitle",
        "publish_date",
        "is_featured",
        "content",
        "image_url",
        "category_id",
    ];
    const PROJECTION: &'static str = "t.*, sc.name AS category_name";
    const JOINS: &'static str = "LEFT JOIN service_categories sc ON sc.id = t.category_id";
    const ORDER_BY: &'static str = "t.publish_date DESC, t.id DESC";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &'q NewsInput) -> PgQueryAs<'q, Self> {
        query
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(input.publish_date)
            .bind(input.is_featured)
            .bind(&input.content)
            .bind(&input.image_url)
            .bind(input.category_id)
    }

    fn parents(input: &NewsInput) -> Vec<ParentRef> {
        input
            .category_id
            .map(|id| ParentRef {
                table: "service_categories",
                id,
                message: "Invalid category",
            })
            .into_iter()
            .collect()
    }
}
