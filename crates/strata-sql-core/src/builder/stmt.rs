//! Statement assembly.
//!
//! [`build`] resolves the leading keyword for an action, asks each clause
//! formatter for its fragment, and joins the present fragments with single
//! spaces. The fixed clause order is: join, keys, values, set, where.

use crate::error::BuildError;

use super::clause;
use super::options::QueryOptions;

/// The action a statement performs.
///
/// `Create`, `Alter`, and `Drop` only resolve their leading keyword here;
/// schema management itself belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `select ... from <table>`
    Select,
    /// `insert into <table>`
    Insert,
    /// `update <table>`
    Update,
    /// `delete from <table>`
    Delete,
    /// `create table <table>`
    Create,
    /// `alter table <table>`
    Alter,
    /// `drop table <table>`
    Drop,
}

/// Assembles one SQL statement from an action, a table name, and a query
/// description.
///
/// # Errors
///
/// Returns [`BuildError::MalformedQuerySpec`] for a join spec that does not
/// name exactly this table and one other, or a nested disjunction list.
///
/// # Example
///
/// ```rust
/// use strata_sql_core::{build, column_spec, Action, QueryOptions};
///
/// let opts = QueryOptions::new().where_clause(column_spec! { "id" => 1 });
/// let sql = build(Action::Select, "todo", &opts)?;
/// assert_eq!(sql, "select * from todo where id = 1");
/// # Ok::<(), strata_sql_core::BuildError>(())
/// ```
pub fn build(action: Action, table: &str, options: &QueryOptions) -> Result<String, BuildError> {
    let mut fragments = vec![match action {
        Action::Select => clause::select(options.select.as_deref(), table),
        Action::Insert => format!("insert into {table}"),
        Action::Update => format!("update {table}"),
        Action::Delete => format!("delete from {table}"),
        Action::Create => format!("create table {table}"),
        Action::Alter => format!("alter table {table}"),
        Action::Drop => format!("drop table {table}"),
    }];

    if let Some(spec) = &options.join {
        if let Some(fragment) = clause::join(spec, table)? {
            fragments.push(fragment);
        }
    }
    if let Some(rows) = &options.values {
        if let Some(fragment) = clause::keys(rows) {
            fragments.push(fragment);
        }
        if let Some(fragment) = clause::values(rows, options.named) {
            fragments.push(fragment);
        }
    }
    if let Some(spec) = &options.set {
        if let Some(fragment) = clause::set(spec) {
            fragments.push(fragment);
        }
    }
    if let Some(spec) = &options.where_clause {
        // Keys are table-qualified whenever a join is in play.
        let qualify = options.join.is_some();
        if let Some(fragment) = clause::where_clause(spec, table, qualify)? {
            fragments.push(fragment);
        }
    }

    Ok(fragments.join(" "))
}

/// Builds a `select` statement.
pub fn select(table: &str, options: &QueryOptions) -> Result<String, BuildError> {
    build(Action::Select, table, options)
}

/// Builds an `insert` statement with named value placeholders.
pub fn insert(table: &str, options: &QueryOptions) -> Result<String, BuildError> {
    build(Action::Insert, table, options)
}

/// Builds an `update` statement.
pub fn update(table: &str, options: &QueryOptions) -> Result<String, BuildError> {
    build(Action::Update, table, options)
}

/// Builds a `delete` statement.
pub fn delete(table: &str, options: &QueryOptions) -> Result<String, BuildError> {
    build(Action::Delete, table, options)
}
