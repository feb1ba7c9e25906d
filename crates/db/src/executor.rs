//! Query executor.
//!
//! Every call runs exactly one statement inside its own transaction:
//! begin, execute, commit on success, roll back on failure. The pooled
//! connection goes back to the pool when the transaction is dropped, on
//! every path. Nothing is retried here; failures surface as [`QueryError`].

use sqlx::postgres::{PgArguments, PgQueryResult, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{Execute, FromRow, PgPool, Postgres, Transaction};

/// A typed query with positional arguments.
pub type PgQueryAs<'q, O> = QueryAs<'q, Postgres, O, PgArguments>;

/// An untyped query with positional arguments.
pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Any failure inside the database layer: pool exhaustion, connection loss,
/// constraint violation, malformed SQL.
#[derive(Debug, thiserror::Error)]
#[error("Query failed: {0}")]
pub struct QueryError(#[from] pub sqlx::Error);

impl QueryError {
    /// The PostgreSQL SQLSTATE code, if the failure came from the server.
    pub fn sqlstate(&self) -> Option<String> {
        match &self.0 {
            sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
            _ => None,
        }
    }

    /// True when a unique index rejected the statement.
    pub fn is_unique_violation(&self) -> bool {
        self.sqlstate().as_deref() == Some("23505")
    }
}

/// Handle to the shared pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
    log_queries: bool,
}

impl Db {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            log_queries: false,
        }
    }

    /// Log every statement at debug level before it runs.
    pub fn with_query_log(mut self, enabled: bool) -> Self {
        self.log_queries = enabled;
        self
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run a row-returning statement and collect every row.
    pub async fn fetch_all<'q, O>(&self, query: PgQueryAs<'q, O>) -> Result<Vec<O>, QueryError>
    where
        O: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        self.trace(query.sql());
        let mut tx = self.pool.begin().await?;
        let result = query.fetch_all(&mut *tx).await;
        finish(tx, result).await
    }

    /// Run a statement expected to return zero or one row.
    pub async fn fetch_optional<'q, O>(
        &self,
        query: PgQueryAs<'q, O>,
    ) -> Result<Option<O>, QueryError>
    where
        O: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        self.trace(query.sql());
        let mut tx = self.pool.begin().await?;
        let result = query.fetch_optional(&mut *tx).await;
        finish(tx, result).await
    }

    /// Run a statement that must return exactly one row.
    pub async fn fetch_one<'q, O>(&self, query: PgQueryAs<'q, O>) -> Result<O, QueryError>
    where
        O: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        self.trace(query.sql());
        let mut tx = self.pool.begin().await?;
        let result = query.fetch_one(&mut *tx).await;
        finish(tx, result).await
    }

    /// Run a mutation and report how many rows it touched.
    pub async fn execute(&self, query: PgQuery<'_>) -> Result<PgQueryResult, QueryError> {
        self.trace(query.sql());
        let mut tx = self.pool.begin().await?;
        let result = query.execute(&mut *tx).await;
        finish(tx, result).await
    }

    fn trace(&self, sql: &str) {
        if self.log_queries {
            tracing::debug!(sql = %sql, "Executing query");
        }
    }
}

/// Commit on success, roll back on failure, and hand back the statement result.
async fn finish<T>(
    tx: Transaction<'static, Postgres>,
    result: Result<T, sqlx::Error>,
) -> Result<T, QueryError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "Rollback failed");
            }
            Err(QueryError(err))
        }
    }
}
