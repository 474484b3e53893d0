//! Clause formatters.
//!
//! Each formatter consumes one piece of a [`QueryOptions`] description and
//! produces one clause fragment. An absent fragment is `None`, and the
//! assembler skips it outright, so no clause ever contributes a stray
//! keyword or separator.
//!
//! [`QueryOptions`]: super::options::QueryOptions

use crate::error::BuildError;

use super::bind;
use super::options::{ColumnSpec, JoinSpec, Rows};
use super::value::SqlValue;

/// Formats the column list of an insert: `(c1, c2, ...)`.
///
/// Columns come from the row schema, ascending. Absent when there are no
/// columns.
#[must_use]
pub fn keys(rows: &Rows) -> Option<String> {
    let columns = rows.columns();
    if columns.is_empty() {
        return None;
    }
    Some(format!("({})", columns.join(", ")))
}

/// Formats the placeholder list of an insert.
///
/// Mirrors [`keys`]: same columns, same order. Named mode emits one
/// `:column` placeholder per column, `values(:c1, :c2, ...)`; otherwise
/// each column gets a positional `?`, `values(?, ?, ...)`.
#[must_use]
pub fn values(rows: &Rows, named: bool) -> Option<String> {
    let columns = rows.columns();
    if columns.is_empty() {
        return None;
    }
    let placeholders: Vec<String> = if named {
        columns.iter().map(|c| format!(":{c}")).collect()
    } else {
        columns
            .iter()
            .map(|_| String::from(SqlValue::placeholder()))
            .collect()
    };
    Some(format!("values({})", placeholders.join(", ")))
}

/// Formats the set clause: `set c1 = v1, c2 = v2`.
#[must_use]
pub fn set(spec: &ColumnSpec) -> Option<String> {
    if spec.is_empty() {
        return None;
    }
    Some(format!("set {}", bind::bind_all(spec, ", ")))
}

/// Formats the where clause.
///
/// Scalar values bind as `key = value`; a list value becomes a
/// parenthesized `or`-disjunction in the list's given order. Scalar keys
/// come first, then disjunction keys, each group in ascending key order,
/// and all fragments join with `" and "` under a leading `where`. When
/// `qualify` is set, every bare key is prefixed with `table.`.
///
/// # Errors
///
/// A list nested inside a disjunction is a malformed spec.
pub fn where_clause(
    spec: &ColumnSpec,
    table: &str,
    qualify: bool,
) -> Result<Option<String>, BuildError> {
    if spec.is_empty() {
        return Ok(None);
    }
    let qualified = |key: &str| {
        if qualify {
            format!("{table}.{key}")
        } else {
            String::from(key)
        }
    };
    let mut fragments = Vec::with_capacity(spec.len());
    for (key, value) in spec {
        if !value.is_list() {
            fragments.push(bind::bind(&qualified(key), value));
        }
    }
    for (key, value) in spec {
        if let SqlValue::List(items) = value {
            if items.iter().any(SqlValue::is_list) {
                return Err(BuildError::malformed(format!(
                    "nested list in disjunction for column {key}"
                )));
            }
            fragments.push(format!("({})", bind::bind_each(&qualified(key), items, " or ")));
        }
    }
    Ok(Some(format!("where {}", fragments.join(" and "))))
}

/// Formats the join clause:
/// `inner join <target> on <target>.<col> = <table>.<col>`.
///
/// The target is the spec's table that is not `table`; each side joins on
/// its own mapped column.
///
/// # Errors
///
/// The spec must name exactly two tables, one of them `table`.
pub fn join(spec: &JoinSpec, table: &str) -> Result<Option<String>, BuildError> {
    if spec.is_empty() {
        return Ok(None);
    }
    if spec.len() != 2 {
        return Err(BuildError::malformed(
            "join spec must name exactly two tables",
        ));
    }
    let own_column = spec.get(table).ok_or_else(|| {
        BuildError::malformed(format!("join spec does not reference table {table}"))
    })?;
    let (target, target_column) = spec
        .iter()
        .find(|(name, _)| name.as_str() != table)
        .ok_or_else(|| BuildError::malformed("join spec names only the source table"))?;
    Ok(Some(format!(
        "inner join {target} on {target}.{target_column} = {table}.{own_column}"
    )))
}

/// Formats the leading select fragment: `select <columns> from <table>`,
/// or `select * from <table>` when no columns are given.
#[must_use]
pub fn select(columns: Option<&[String]>, table: &str) -> String {
    match columns {
        Some(cols) if !cols.is_empty() => format!("select {} from {table}", cols.join(", ")),
        _ => format!("select * from {table}"),
    }
}
