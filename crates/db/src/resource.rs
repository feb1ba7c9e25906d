//! Per-entity configuration for the generic repository.
//!
//! An entity describes its table, writable columns, read projection, sort
//! order and relationships as associated constants. [`Repo`](crate::repositories::Repo)
//! builds every statement from these, so no entity carries hand-written CRUD SQL.
//!
//! Read statements alias the entity's own table as `t`, so `PROJECTION`,
//! `JOINS`, `ORDER_BY` and `SEARCH_COLUMNS` refer to it as `t.<column>`.

use serde::Serialize;
use showcase_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::FromRow;

use crate::executor::PgQueryAs;

/// A row that must exist before an input may be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRef {
    pub table: &'static str,
    pub id: DbId,
    /// Client-facing message when the row is missing.
    pub message: &'static str,
}

/// Rows in another table whose presence blocks deleting this entity.
#[derive(Debug, Clone, Copy)]
pub struct Dependent {
    pub table: &'static str,
    /// Foreign-key column in `table` pointing at this entity's id.
    pub column: &'static str,
    pub message: &'static str,
}

pub trait Resource:
    for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static
{
    /// Body accepted by both create and full-replace update.
    type Input: Send + Sync + 'static;

    /// Display name used in messages ("Event with ID 3 not found").
    const NAME: &'static str;
    const TABLE: &'static str;
    /// Writable columns, in the order [`Resource::bind_input`] binds them.
    const COLUMNS: &'static [&'static str];
    const PROJECTION: &'static str = "t.*";
    const JOINS: &'static str = "";
    const ORDER_BY: &'static str;
    /// Text columns matched by `search`, OR-combined.
    const SEARCH_COLUMNS: &'static [&'static str] = &[];
    const DEPENDENTS: &'static [Dependent] = &[];

    fn id(&self) -> DbId;

    /// Bind one value per entry of [`Resource::COLUMNS`], in order.
    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &'q Self::Input) -> PgQueryAs<'q, Self>;

    /// Parent rows referenced by `input`.
    fn parents(_input: &Self::Input) -> Vec<ParentRef> {
        Vec::new()
    }
}

fn quoted_columns<R: Resource>() -> String {
    R::COLUMNS
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `SELECT` over the entity with its joins, optionally filtered.
pub(crate) fn select_sql<R: Resource>(filter: Option<&str>) -> String {
    let mut sql = format!("SELECT {} FROM {} t", R::PROJECTION, R::TABLE);
    if !R::JOINS.is_empty() {
        sql.push(' ');
        sql.push_str(R::JOINS);
    }
    if let Some(filter) = filter {
        sql.push_str(" WHERE ");
        sql.push_str(filter);
    }
    sql.push_str(" ORDER BY ");
    sql.push_str(R::ORDER_BY);
    sql
}

/// Wrap a data-modifying statement so the returned row goes through the
/// same projection and joins as reads.
fn returning_projection<R: Resource>(modify: &str) -> String {
    let mut sql = format!("WITH t AS ({modify} RETURNING *) SELECT {} FROM t", R::PROJECTION);
    if !R::JOINS.is_empty() {
        sql.push(' ');
        sql.push_str(R::JOINS);
    }
    sql
}

/// Insert binding `$1..$n` in column order.
pub(crate) fn insert_sql<R: Resource>() -> String {
    let placeholders = (1..=R::COLUMNS.len())
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ");
    returning_projection::<R>(&format!(
        "INSERT INTO {} ({}) VALUES ({placeholders})",
        R::TABLE,
        quoted_columns::<R>()
    ))
}

/// Full-replace update: `$1` is the id, columns follow from `$2`.
pub(crate) fn update_sql<R: Resource>() -> String {
    let assignments = R::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| format!("\"{c}\" = ${}", i + 2))
        .collect::<Vec<_>>()
        .join(", ");
    returning_projection::<R>(&format!(
        "UPDATE {} SET {assignments} WHERE id = $1",
        R::TABLE
    ))
}

/// OR-combined case-insensitive match of `$1` across the search columns.
pub(crate) fn search_filter<R: Resource>() -> Option<String> {
    if R::SEARCH_COLUMNS.is_empty() {
        return None;
    }
    let clauses = R::SEARCH_COLUMNS
        .iter()
        .map(|c| format!("{c} ILIKE $1"))
        .collect::<Vec<_>>()
        .join(" OR ");
    Some(format!("({clauses})"))
}

/// Turn a user term into a `%term%` pattern with LIKE metacharacters escaped.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
