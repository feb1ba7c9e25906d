//! Repository for the `users` table (read-only).

use showcase_core::types::DbId;

use crate::executor::{Db, QueryError};
use crate::models::user::User;

const COLUMNS: &str = "id, username, email, role, created_at";

pub struct UserRepo;

impl UserRepo {
    pub async fn find_by_id(db: &Db, id: DbId) -> Result<Option<User>, QueryError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        db.fetch_optional(sqlx::query_as::<_, User>(&query).bind(id))
            .await
    }
}
