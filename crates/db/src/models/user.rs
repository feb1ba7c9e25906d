use serde::Serialize;
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from `users`. Only the public profile columns are read.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: Timestamp,
}
