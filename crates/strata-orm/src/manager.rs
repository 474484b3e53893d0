//! Manager for database access.
//!
//! The Manager is the object layer's single entry point: it describes each
//! operation as a [`QueryOptions`], lets the statement builder render the
//! SQL, and forwards the string to sqlx for execution. Filter and set
//! values travel inline in the statement; insert values and primary-key
//! lookups bind through positional placeholders.

use sqlx::sqlite::SqliteArguments;
use sqlx::{Row, Sqlite, SqlitePool};
use std::marker::PhantomData;

use strata_sql_core::builder::bind;
use strata_sql_core::{ColumnSpec, QueryOptions, Rows, SqlValue, ToSqlValue};

use crate::error::{OrmError, Result};
use crate::model::Model;

/// Database access methods for a Model.
///
/// Managers are lightweight and can be created freely; every Model has one
/// via `Model::objects()`.
///
/// # Example
///
/// ```ignore
/// let all = Todo::objects().all(&pool).await?;
/// let id = Todo::objects().insert(&pool, &todo).await?;
/// Todo::objects()
///     .update(&pool, column_spec! { "date" => 2021 }, column_spec! { "id" => id })
///     .await?;
/// ```
#[derive(Debug)]
pub struct Manager<M: Model> {
    _marker: PhantomData<M>,
}

impl<M: Model> Clone for Manager<M> {
    fn clone(&self) -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<M: Model> Copy for Manager<M> {}

impl<M: Model> Default for Manager<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model> Manager<M> {
    /// Creates a new Manager.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Fetches every row of the table.
    pub async fn all(&self, pool: &SqlitePool) -> Result<Vec<M>> {
        let sql = strata_sql_core::select(M::NAME, &QueryOptions::new().select(M::COLUMNS))?;
        Ok(sqlx::query_as::<_, M>(&sql).fetch_all(pool).await?)
    }

    /// Fetches the rows matching a filter spec.
    pub async fn find(&self, pool: &SqlitePool, filter: ColumnSpec) -> Result<Vec<M>> {
        let opts = QueryOptions::new()
            .select(M::COLUMNS)
            .where_clause(filter);
        let sql = strata_sql_core::select(M::NAME, &opts)?;
        Ok(sqlx::query_as::<_, M>(&sql).fetch_all(pool).await?)
    }

    /// Gets the object with the given primary key.
    pub async fn get(&self, pool: &SqlitePool, pk: M::PrimaryKey) -> Result<M> {
        self.get_or_none(pool, pk).await?.ok_or(OrmError::NotFound)
    }

    /// Gets the object with the given primary key, or `None`.
    ///
    /// The key travels as a bound parameter rather than inline text.
    pub async fn get_or_none(
        &self,
        pool: &SqlitePool,
        pk: M::PrimaryKey,
    ) -> Result<Option<M>> {
        let select = strata_sql_core::select(M::NAME, &QueryOptions::new().select(M::COLUMNS))?;
        let sql = format!("{select} where {}", bind::bind_placeholder(M::pk_column()));
        let query = bind_value_as(sqlx::query_as::<_, M>(&sql), pk.to_sql_value())?;
        Ok(query.fetch_optional(pool).await?)
    }

    /// Counts the rows matching a filter spec; `None` counts them all.
    pub async fn count(&self, pool: &SqlitePool, filter: Option<ColumnSpec>) -> Result<i64> {
        let mut opts = QueryOptions::new().select(&["count(*)"]);
        if let Some(filter) = filter {
            opts = opts.where_clause(filter);
        }
        let sql = strata_sql_core::select(M::NAME, &opts)?;
        let row = sqlx::query(&sql).fetch_one(pool).await?;
        Ok(row.get(0))
    }

    /// Returns whether any row matches the filter spec.
    pub async fn exists(&self, pool: &SqlitePool, filter: ColumnSpec) -> Result<bool> {
        Ok(self.count(pool, Some(filter)).await? > 0)
    }

    /// Inserts one instance and returns its rowid.
    pub async fn insert(&self, pool: &SqlitePool, instance: &M) -> Result<i64> {
        let row = instance.to_columns();
        let opts = QueryOptions::new()
            .values(Rows::Single(row.clone()))
            .named(false);
        let sql = strata_sql_core::insert(M::NAME, &opts)?;
        let mut query = sqlx::query(&sql);
        // Column list and positional placeholders are both in ascending
        // key order, so binding in iteration order lines up.
        for value in row.into_values() {
            query = bind_value(query, value)?;
        }
        let done = query.execute(pool).await?;
        Ok(done.last_insert_rowid())
    }

    /// Inserts many instances, one statement execution per row.
    ///
    /// All rows share the first row's column schema.
    pub async fn insert_many(&self, pool: &SqlitePool, instances: &[M]) -> Result<u64> {
        let rows = Rows::Many(instances.iter().map(Model::to_columns).collect());
        if rows.is_empty() {
            return Ok(0);
        }
        let opts = QueryOptions::new().values(rows.clone()).named(false);
        let sql = strata_sql_core::insert(M::NAME, &opts)?;
        let mut affected = 0;
        for row in rows.as_slice() {
            let mut query = sqlx::query(&sql);
            for value in row.values() {
                query = bind_value(query, value.clone())?;
            }
            affected += query.execute(pool).await?.rows_affected();
        }
        Ok(affected)
    }

    /// Updates the rows matching a filter spec, returning the count.
    pub async fn update(
        &self,
        pool: &SqlitePool,
        set: ColumnSpec,
        filter: ColumnSpec,
    ) -> Result<u64> {
        let opts = QueryOptions::new().set(set).where_clause(filter);
        let sql = strata_sql_core::update(M::NAME, &opts)?;
        Ok(sqlx::query(&sql).execute(pool).await?.rows_affected())
    }

    /// Deletes the rows matching a filter spec, returning the count.
    pub async fn delete(&self, pool: &SqlitePool, filter: ColumnSpec) -> Result<u64> {
        let opts = QueryOptions::new().where_clause(filter);
        let sql = strata_sql_core::delete(M::NAME, &opts)?;
        Ok(sqlx::query(&sql).execute(pool).await?.rows_affected())
    }

    /// Deletes every row of the table, returning the count.
    pub async fn delete_all(&self, pool: &SqlitePool) -> Result<u64> {
        let sql = strata_sql_core::delete(M::NAME, &QueryOptions::new())?;
        Ok(sqlx::query(&sql).execute(pool).await?.rows_affected())
    }
}

/// Binds a scalar `SqlValue` parameter to a query.
fn bind_value<'q>(
    query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    value: SqlValue,
) -> Result<sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>> {
    Ok(match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::List(_) => return Err(OrmError::NonScalarParameter),
    })
}

/// Binds a scalar `SqlValue` parameter to a `query_as` query.
fn bind_value_as<'q, M>(
    query: sqlx::query::QueryAs<'q, Sqlite, M, SqliteArguments<'q>>,
    value: SqlValue,
) -> Result<sqlx::query::QueryAs<'q, Sqlite, M, SqliteArguments<'q>>>
where
    M: for<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow>,
{
    Ok(match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::List(_) => return Err(OrmError::NonScalarParameter),
    })
}
