//! "Our team" page: an intro section, member cards, and a photo gallery.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::executor::PgQueryAs;
use crate::resource::Resource;

/// A row from `team_section`. The page shows the first one.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamSection {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TeamSectionInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

impl Resource for TeamSection {
    type Input = TeamSectionInput;

    const NAME: &'static str = "Team section";
    const TABLE: &'static str = "team_section";
    const COLUMNS: &'static [&'static str] = &["title", "description"];
    const ORDER_BY: &'static str = "t.id";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_input<'q>(
        query: PgQueryAs<'q, Self>,
        input: &'q TeamSectionInput,
    ) -> PgQueryAs<'q, Self> {
        query.bind(&input.title).bind(&input.description)
    }
}

/// A row from `team_members`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub fullname: String,
    pub title: String,
    pub description: String,
    pub photo_url: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TeamMemberInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Fullname is required"))]
    pub fullname: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub photo_url: Option<String>,
}

impl Resource for TeamMember {
    type Input = TeamMemberInput;

    const NAME: &'static str = "Team member";
    const TABLE: &'static str = "team_members";
    const COLUMNS: &'static [&'static str] = &["fullname", "title", "description", "photo_url"];
    const ORDER_BY: &'static str = "t.id";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_input<'q>(
        query: PgQueryAs<'q, Self>,
        input: &'q TeamMemberInput,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(&input.fullname)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.photo_url)
    }
}

/// A row from `team_gallery`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryImage {
    pub id: DbId,
    pub image_url: String,
    pub caption: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GalleryImageInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
    pub caption: Option<String>,
}

impl Resource for GalleryImage {
    type Input = GalleryImageInput;

    const NAME: &'static str = "Gallery image";
    const TABLE: &'static str = "team_gallery";
    const COLUMNS: &'static [&'static str] = &["image_url", "caption"];
    const ORDER_BY: &'static str = "t.id";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_input<'q>(
        query: PgQueryAs<'q, Self>,
        input: &'q GalleryImageInput,
    ) -> PgQueryAs<'q, Self> {
        query.bind(&input.image_url).bind(&input.caption)
    }
}

/// The whole team page in one payload.
#[derive(Debug, Serialize)]
pub struct TeamOverview {
    pub section: Option<TeamSection>,
    pub members: Vec<TeamMember>,
    pub gallery: Vec<GalleryImage>,
}
