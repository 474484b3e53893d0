//! Key/value fragment binding.
//!
//! The binder turns a column name, the `=` operator, and a rendered value
//! into one `column = value` fragment. Multi mode walks a whole
//! [`ColumnSpec`] (ascending key order) or a value list under one shared
//! column, joining the fragments with the caller's separator.

use super::options::ColumnSpec;
use super::value::SqlValue;

/// Binds one column to one value: `column = <rendered value>`.
#[must_use]
pub fn bind(column: &str, value: &SqlValue) -> String {
    format!("{column} = {}", value.to_sql_inline())
}

/// Binds one column to a positional placeholder: `column = ?`.
#[must_use]
pub fn bind_placeholder(column: &str) -> String {
    format!("{column} = {}", SqlValue::placeholder())
}

/// Binds every pair of a spec, joined by `separator` in key order.
#[must_use]
pub fn bind_all(spec: &ColumnSpec, separator: &str) -> String {
    let fragments: Vec<String> = spec.iter().map(|(k, v)| bind(k, v)).collect();
    fragments.join(separator)
}

/// Binds every value under one shared column, in the values' given order.
#[must_use]
pub fn bind_each(column: &str, values: &[SqlValue], separator: &str) -> String {
    let fragments: Vec<String> = values.iter().map(|v| bind(column, v)).collect();
    fragments.join(separator)
}
