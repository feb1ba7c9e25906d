//! Solutions (business offerings) and the products bundled in each.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::aggregate::Relation;
use crate::executor::PgQueryAs;
use crate::resource::{ParentRef, Resource};

/// A row from the `solutions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Solution {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub link_url: String,
    pub business_line: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SolutionInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Link URL is required"))]
    pub link_url: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Business line is required"))]
    pub business_line: String,
}

impl Resource for Solution {
    type Input = SolutionInput;

    const NAME: &'static str = "Solution";
    const TABLE: &'static str = "solutions";
    const COLUMNS: &'static [&'static str] =
        &["name", "description", "image_url", "link_url", "business_line"];
    const ORDER_BY: &'static str = "t.created_at DESC, t.id DESC";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &'q SolutionInput) -> PgQueryAs<'q, Self> {
        query
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.link_url)
            .bind(&input.business_line)
    }
}

/// A row from `solutions_products`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SolutionProduct {
    pub id: DbId,
    pub solution_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SolutionProductInput {
    #[serde(default)]
    #[validate(range(min = 1, message = "Solution ID must be a positive integer"))]
    pub solution_id: DbId,
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
}

impl Resource for SolutionProduct {
    type Input = SolutionProductInput;

    const NAME: &'static str = "Solution product";
    const TABLE: &'static str = "solutions_products";
    const COLUMNS: &'static [&'static str] = &["solution_id", "name", "description"];
    const ORDER_BY: &'static str = "t.created_at DESC, t.id DESC";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_input<'q>(
        query: PgQueryAs<'q, Self>,
        input: &'q SolutionProductInput,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(input.solution_id)
            .bind(&input.name)
            .bind(&input.description)
    }

    fn parents(input: &SolutionProductInput) -> Vec<ParentRef> {
        vec![ParentRef {
            table: "solutions",
            id: input.solution_id,
            message: "Invalid solution_id - solution not found",
        }]
    }
}

/// Solution → bundled products, serialized under `products`.
pub struct SolutionWithProducts;

impl Relation for SolutionWithProducts {
    type Parent = Solution;
    type Child = SolutionProduct;
    const FOREIGN_KEY: &'static str = "solution_id";
    const FIELD: &'static str = "products";
}
