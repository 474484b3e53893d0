//! Model trait.
//!
//! A `Model` names its table and columns and knows how to turn an instance
//! into the column/value mapping the statement builder consumes.

use strata_sql_core::{ColumnSpec, ToSqlValue};

use crate::manager::Manager;

/// A database model backed by one table.
///
/// # Example
///
/// ```ignore
/// use strata_orm::Model;
///
/// let todo = Todo::objects().get(&pool, 1).await?;
/// let open = Todo::objects()
///     .find(&pool, column_spec! { "act" => vec!["open", "overdue"] })
///     .await?;
/// ```
pub trait Model:
    Sized + Send + Sync + Unpin + for<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> + 'static
{
    /// The table name.
    const NAME: &'static str;

    /// All column names, in table order.
    const COLUMNS: &'static [&'static str];

    /// The primary key type.
    type PrimaryKey: ToSqlValue + Clone + Send + Sync;

    /// Returns the primary key column name.
    fn pk_column() -> &'static str;

    /// Returns the primary key value for this instance.
    fn pk(&self) -> Self::PrimaryKey;

    /// Returns this instance as a column/value mapping for inserts.
    ///
    /// Auto-assigned columns (typically the primary key) should be left
    /// out so the store can fill them in.
    fn to_columns(&self) -> ColumnSpec;

    /// Returns a new Manager for this model.
    fn objects() -> Manager<Self> {
        Manager::new()
    }
}
