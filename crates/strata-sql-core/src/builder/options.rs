//! Declarative query descriptions.
//!
//! A statement is described by a [`QueryOptions`] value: column/value
//! mappings for `where` and `set`, a projection list for `select`, rows for
//! `insert`, and a join spec. The mappings are `BTreeMap`s, so every
//! multi-key clause iterates in lexicographically ascending key order and
//! the same description always renders the same statement.

use std::collections::BTreeMap;

use super::value::{SqlValue, ToSqlValue};

/// A mapping from column name to value.
///
/// Keys are unique and iterate in ascending order. A [`SqlValue::List`]
/// value describes an `OR`-disjunction over its column; the list keeps its
/// own insertion order.
pub type ColumnSpec = BTreeMap<String, SqlValue>;

/// A join spec: exactly two table names mapped to the columns joined on.
pub type JoinSpec = BTreeMap<String, String>;

/// Builds a [`ColumnSpec`] from key/value pairs.
///
/// # Example
///
/// ```rust
/// use strata_sql_core::{column_spec, SqlValue};
///
/// let spec = column_spec([("id", 1), ("date", 2021)]);
/// assert_eq!(spec.get("id"), Some(&SqlValue::Int(1)));
/// ```
pub fn column_spec<K, V, I>(pairs: I) -> ColumnSpec
where
    K: Into<String>,
    V: ToSqlValue,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.to_sql_value()))
        .collect()
}

/// Builds a [`ColumnSpec`] from key/value pairs of mixed value types.
///
/// # Example
///
/// ```rust
/// use strata_sql_core::column_spec;
///
/// let spec = column_spec! {
///     "name" => "conni",
///     "date" => 2021,
///     "act" => vec!["done", "overdue"],
/// };
/// assert_eq!(spec.len(), 3);
/// ```
#[macro_export]
macro_rules! column_spec {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut spec = $crate::ColumnSpec::new();
        $(
            spec.insert(
                ::std::string::String::from($key),
                $crate::ToSqlValue::to_sql_value($value),
            );
        )*
        spec
    }};
}

/// The rows of an insert: either one row or an explicit list of rows.
///
/// The variant is chosen by the caller, so a single multi-column row is
/// never mistaken for a list of rows. For [`Rows::Many`] the first row's
/// keys define the column schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// A single row.
    Single(ColumnSpec),
    /// Multiple rows sharing the first row's columns.
    Many(Vec<ColumnSpec>),
}

impl Rows {
    /// Returns the column schema, sorted ascending.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        match self {
            Self::Single(row) => row.keys().map(String::as_str).collect(),
            Self::Many(rows) => rows
                .first()
                .map(|row| row.keys().map(String::as_str).collect())
                .unwrap_or_default(),
        }
    }

    /// Returns the rows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ColumnSpec] {
        match self {
            Self::Single(row) => std::slice::from_ref(row),
            Self::Many(rows) => rows,
        }
    }

    /// Returns whether there are no columns to emit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns().is_empty()
    }
}

/// Configuration for one statement.
///
/// Every field is optional; an absent field simply omits its clause from
/// the assembled statement.
///
/// # Example
///
/// ```rust
/// use strata_sql_core::{column_spec, QueryOptions};
///
/// let opts = QueryOptions::new()
///     .set(column_spec([("date", 2021)]))
///     .where_clause(column_spec([("id", 1)]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOptions {
    /// Filter spec for the where clause.
    pub where_clause: Option<ColumnSpec>,
    /// Assignments for the set clause.
    pub set: Option<ColumnSpec>,
    /// Columns to project; `None` (or empty) selects `*`.
    pub select: Option<Vec<String>>,
    /// Rows for an insert.
    pub values: Option<Rows>,
    /// Join spec; when present, where-clause columns are table-qualified.
    pub join: Option<JoinSpec>,
    /// Emit named `:column` insert placeholders; positional `?` when
    /// disabled.
    pub named: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            where_clause: None,
            set: None,
            select: None,
            values: None,
            join: None,
            named: true,
        }
    }
}

impl QueryOptions {
    /// Creates an empty description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the where-clause spec.
    #[must_use]
    pub fn where_clause(mut self, spec: ColumnSpec) -> Self {
        self.where_clause = Some(spec);
        self
    }

    /// Sets the set-clause assignments.
    #[must_use]
    pub fn set(mut self, spec: ColumnSpec) -> Self {
        self.set = Some(spec);
        self
    }

    /// Sets the projected columns.
    #[must_use]
    pub fn select(mut self, columns: &[&str]) -> Self {
        self.select = Some(columns.iter().map(|c| String::from(*c)).collect());
        self
    }

    /// Sets the insert rows.
    #[must_use]
    pub fn values(mut self, rows: Rows) -> Self {
        self.values = Some(rows);
        self
    }

    /// Sets the join spec.
    #[must_use]
    pub fn join(mut self, spec: JoinSpec) -> Self {
        self.join = Some(spec);
        self
    }

    /// Toggles named insert placeholders.
    #[must_use]
    pub fn named(mut self, named: bool) -> Self {
        self.named = named;
        self
    }
}
