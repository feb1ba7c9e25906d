//! Generic CRUD repository driven by [`Resource`] configuration.

use std::marker::PhantomData;

use showcase_core::types::DbId;
use sqlx::{Encode, Postgres, Type};

use crate::executor::{Db, QueryError};
use crate::resource::{self, Resource};

/// Provides list/read/write operations for any [`Resource`].
///
/// Zero-sized like the hand-written repositories: `Repo::<Event>::list(&db)`.
pub struct Repo<R>(PhantomData<R>);

impl<R: Resource> Repo<R> {
    /// Every row, in the entity's display order.
    pub async fn list(db: &Db) -> Result<Vec<R>, QueryError> {
        let sql = resource::select_sql::<R>(None);
        db.fetch_all(sqlx::query_as::<_, R>(&sql)).await
    }

    /// A single row by id, or `None` when absent.
    pub async fn find_by_id(db: &Db, id: DbId) -> Result<Option<R>, QueryError> {
        let sql = resource::select_sql::<R>(Some("t.id = $1"));
        db.fetch_optional(sqlx::query_as::<_, R>(&sql).bind(id))
            .await
    }

    pub async fn exists(db: &Db, id: DbId) -> Result<bool, QueryError> {
        row_exists(db, R::TABLE, id).await
    }

    /// Rows whose `column` equals `value`, in display order.
    ///
    /// `column` is an unqualified column of the entity's own table and must
    /// come from code, never from the request.
    pub async fn list_by<V>(db: &Db, column: &'static str, value: V) -> Result<Vec<R>, QueryError>
    where
        V: for<'q> Encode<'q, Postgres> + Type<Postgres> + Send + 'static,
    {
        let filter = format!("t.\"{column}\" = $1");
        let sql = resource::select_sql::<R>(Some(&filter));
        db.fetch_all(sqlx::query_as::<_, R>(&sql).bind(value)).await
    }

    /// Case-insensitive substring match across the entity's search columns.
    /// Entities without search columns match nothing.
    pub async fn search(db: &Db, term: &str) -> Result<Vec<R>, QueryError> {
        let Some(filter) = resource::search_filter::<R>() else {
            return Ok(Vec::new());
        };
        let sql = resource::select_sql::<R>(Some(&filter));
        db.fetch_all(sqlx::query_as::<_, R>(&sql).bind(resource::like_pattern(term)))
            .await
    }

    /// Insert a row and return it as reads would present it.
    pub async fn create(db: &Db, input: &R::Input) -> Result<R, QueryError> {
        let sql = resource::insert_sql::<R>();
        db.fetch_one(R::bind_input(sqlx::query_as::<_, R>(&sql), input))
            .await
    }

    /// Overwrite every writable column. Returns `None` if no row has this id.
    pub async fn update(db: &Db, id: DbId, input: &R::Input) -> Result<Option<R>, QueryError> {
        let sql = resource::update_sql::<R>();
        db.fetch_optional(R::bind_input(sqlx::query_as::<_, R>(&sql).bind(id), input))
            .await
    }

    /// Permanently delete a row. Returns `true` iff exactly one row was removed.
    pub async fn delete(db: &Db, id: DbId) -> Result<bool, QueryError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", R::TABLE);
        let result = db.execute(sqlx::query(&sql).bind(id)).await?;
        Ok(result.rows_affected() == 1)
    }

    /// Message of the first [`Dependent`](crate::resource::Dependent) that
    /// still references `id`, if any.
    pub async fn blocking_dependent(
        db: &Db,
        id: DbId,
    ) -> Result<Option<&'static str>, QueryError> {
        for dependent in R::DEPENDENTS {
            if has_rows(db, dependent.table, dependent.column, id).await? {
                return Ok(Some(dependent.message));
            }
        }
        Ok(None)
    }
}

/// Whether `table` has a row with this id.
pub async fn row_exists(db: &Db, table: &'static str, id: DbId) -> Result<bool, QueryError> {
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = $1)");
    let (exists,): (bool,) = db.fetch_one(sqlx::query_as(&sql).bind(id)).await?;
    Ok(exists)
}

/// Whether any row of `table` has `column = id`.
async fn has_rows(
    db: &Db,
    table: &'static str,
    column: &'static str,
    id: DbId,
) -> Result<bool, QueryError> {
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE \"{column}\" = $1)");
    let (exists,): (bool,) = db.fetch_one(sqlx::query_as(&sql).bind(id)).await?;
    Ok(exists)
}
