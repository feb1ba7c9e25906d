//! Client references (testimonials).

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::executor::PgQueryAs;
use crate::resource::Resource;

/// A row from `client_references`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientReference {
    pub id: DbId,
    pub client_name: String,
    pub company_name: Option<String>,
    pub position: Option<String>,
    pub testimonial: String,
    pub image_url: Option<String>,
    pub country: Option<String>,
    pub rating: Option<i32>,
    pub is_featured: bool,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClientReferenceInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Client name is required"))]
    pub client_name: String,
    pub company_name: Option<String>,
    pub position: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Testimonial is required"))]
    pub testimonial: String,
    pub image_url: Option<String>,
    pub country: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    #[serde(default)]
    pub is_featured: bool,
}

impl Resource for ClientReference {
    type Input = ClientReferenceInput;

    const NAME: &'static str = "Reference";
    const TABLE: &'static str = "client_references";
    const COLUMNS: &'static [&'static str] = &[
        "client_name",
        "company_name",
        "position",
        "testimonial",
        "image_url",
        "country",
        "rating",
        "is_featured",
    ];
    const ORDER_BY: &'static str = "t.created_at DESC, t.id DESC";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_input<'q>(
        query: PgQueryAs<'q, Self>,
        input: &'q ClientReferenceInput,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(&input.client_name)
            .bind(&input.company_name)
            .bind(&input.position)
            .bind(&input.testimonial)
            .bind(&input.image_url)
            .bind(&input.country)
            .bind(input.rating)
            .bind(input.is_featured)
    }
}

/// Every reference plus the featured subset.
#[derive(Debug, Serialize)]
pub struct ReferencesOverview {
    pub references: Vec<ClientReference>,
    #[serde(rename = "featuredReferences")]
    pub featured_references: Vec<ClientReference>,
}
