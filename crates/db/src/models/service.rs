//! Services and the service categories that group them. News articles
//! also reference service categories.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::aggregate::Relation;
use crate::executor::PgQueryAs;
use crate::resource::{ParentRef, Resource};

/// A row from `service_categories`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceCategory {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub icon_url: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServiceCategoryInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Icon URL is required"))]
    pub icon_url: String,
}

impl Resource for ServiceCategory {
    type Input = ServiceCategoryInput;

    const NAME: &'static str = "Service category";
    const TABLE: &'static str = "service_categories";
    const COLUMNS: &'static [&'static str] = &["name", "description", "icon_url"];
    const ORDER_BY: &'static str = "t.name, t.id";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_input<'q>(
        query: PgQueryAs<'q, Self>,
        input: &'q ServiceCategoryInput,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.icon_url)
    }
}

/// A row from `services`, joined with its category name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServiceInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
    #[validate(range(min = 1, message = "Category ID must be a positive integer"))]
    pub category_id: Option<DbId>,
}

impl Resource for Service {
    type Input = ServiceInput;

    const NAME: &'static str = "Service";
    const TABLE: &'static str = "services";
    const COLUMNS: &'static [&'static str] = &["name", "description", "image_url", "category_id"];
    const PROJECTION: &'static str = "t.*, sc.name AS category_name";
    const JOINS: &'static str = "LEFT JOIN service_categories sc ON sc.id = t.category_id";
    const ORDER_BY: &'static str = "t.name, t.id";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &'q ServiceInput) -> PgQueryAs<'q, Self> {
        query
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.category_id)
    }

    fn parents(input: &ServiceInput) -> Vec<ParentRef> {
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

/// Service category → services, serialized under `services`.
pub struct CategoryWithServices;

impl Relation for CategoryWithServices {
    type Parent = ServiceCategory;
    type Child = Service;
    const FOREIGN_KEY: &'static str = "category_id";
    const FIELD: &'static str = "services";
}
