//! Section-level queries for the `about_content` table.

use sqlx::FromRow;

use crate::executor::{Db, QueryError};

#[derive(Debug, FromRow)]
struct SectionRow {
    section: String,
}

pub struct ContentRepo;

impl ContentRepo {
    /// Distinct section names, ordered by where each section first appears
    /// on the page.
    pub async fn sections(db: &Db) -> Result<Vec<String>, QueryError> {
        let rows = db
            .fetch_all(sqlx::query_as::<_, SectionRow>(
                "SELECT section FROM about_content \
                 GROUP BY section ORDER BY MIN(\"order\"), MIN(id)",
            ))
            .await?;
        Ok(rows.into_iter().map(|r| r.section).collect())
    }
}
