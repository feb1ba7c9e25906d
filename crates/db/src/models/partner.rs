use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::executor::PgQueryAs;
use crate::resource::Resource;

/// A row from the `partners` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Partner {
    pub id: DbId,
    pub name: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PartnerInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Partner name is required"))]
    pub name: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "Website URL must be a valid URL"))]
    pub website_url: Option<String>,
}

impl Resource for Partner {
    type Input = PartnerInput;

    const NAME: &'static str = "Partner";
    const TABLE: &'static str = "partners";
    const COLUMNS: &'static [&'static str] = &["name", "image_url", "description", "website_url"];
    const ORDER_BY: &'static str = "t.name, t.id";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &'q PartnerInput) -> PgQueryAs<'q, Self> {
        query
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(&input.description)
            .bind(&input.website_url)
    }
}
