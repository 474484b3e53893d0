//! Map-driven SQL statement construction.
//!
//! A statement is described declaratively: a table name, an [`Action`], and
//! a [`QueryOptions`] holding column/value mappings. The formatters turn
//! each mapping into one clause, and [`build`] assembles the present
//! clauses into a single statement string.
//!
//! Output is deterministic: multi-key clauses always iterate their keys in
//! lexicographically ascending order, and disjunction lists keep their
//! given order.
//!
//! # Example
//!
//! ```rust
//! use strata_sql_core::{column_spec, select, QueryOptions};
//!
//! let opts = QueryOptions::new().where_clause(column_spec! {
//!     "act" => vec!["done", "overdue"],
//!     "name" => "conni",
//!     "date" => 2021,
//! });
//! let sql = select("todo", &opts)?;
//! assert_eq!(
//!     sql,
//!     "select * from todo where date = 2021 and name = 'conni' \
//!      and (act = 'done' or act = 'overdue')"
//! );
//! # Ok::<(), strata_sql_core::BuildError>(())
//! ```

pub mod bind;
pub mod clause;
pub mod options;
pub mod stmt;
pub mod value;

pub use options::{column_spec, ColumnSpec, JoinSpec, QueryOptions, Rows};
pub use stmt::{build, delete, insert, select, update, Action};
pub use value::{SqlValue, ToSqlValue};
