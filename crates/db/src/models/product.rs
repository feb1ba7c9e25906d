//! Product catalogue: categories and the products filed under them.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::aggregate::Relation;
use crate::executor::PgQueryAs;
use crate::resource::{Dependent, ParentRef, Resource};

/// A row from `product_categories`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductCategory {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub icon_url: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductCategoryInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub icon_url: Option<String>,
}

impl Resource for ProductCategory {
    type Input = ProductCategoryInput;

    const NAME: &'static str = "Category";
    const TABLE: &'static str = "product_categories";
    const COLUMNS: &'static [&'static str] = &["name", "description", "image_url", "icon_url"];
    const ORDER_BY: &'static str = "t.name, t.id";
    const DEPENDENTS: &'static [Dependent] = &[Dependent {
        table: "products",
        column: "category_id",
        message: "Cannot delete category that has products. Reassign or delete products first.",
    }];

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_input<'q>(
        query: PgQueryAs<'q, Self>,
        input: &'q ProductCategoryInput,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.icon_url)
    }
}

/// A row from `products`, joined with its category name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub category_id: DbId,
    pub category_name: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, message = "Category ID must be a positive integer"))]
    pub category_id: DbId,
    pub image_url: Option<String>,
}

impl Resource for Product {
    type Input = ProductInput;

    const NAME: &'static str = "Product";
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &["name", "description", "category_id", "image_url"];
    const PROJECTION: &'static str = "t.*, pc.name AS category_name";
    const JOINS: &'static str = "LEFT JOIN product_categories pc ON pc.id = t.category_id";
    const ORDER_BY: &'static str = "t.name, t.id";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &'q ProductInput) -> PgQueryAs<'q, Self> {
        query
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(&input.image_url)
    }

    fn parents(input: &ProductInput) -> Vec<ParentRef> {
        vec![ParentRef {
            table: "product_categories",
            id: input.category_id,
            message: "Invalid category",
        }]
    }
}

/// Product category → products, serialized under `products`.
pub struct CategoryWithProducts;

impl Relation for CategoryWithProducts {
    type Parent = ProductCategory;
    type Child = Product;
    const FOREIGN_KEY: &'static str = "category_id";
    const FIELD: &'static str = "products";
}
