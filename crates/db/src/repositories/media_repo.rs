//! Media queries keyed by URL rather than id.

use crate::executor::{Db, QueryError};

pub struct MediaRepo;

impl MediaRepo {
    /// Remove every media row pointing at `url`. Returns the number removed.
    pub async fn delete_by_url(db: &Db, url: &str) -> Result<u64, QueryError> {
        let result = db
            .execute(sqlx::query("DELETE FROM event_media WHERE url = $1").bind(url))
            .await?;
        Ok(result.rows_affected())
    }
}
