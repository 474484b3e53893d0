//! # strata-sql-core
//!
//! A map-driven SQL statement builder: declarative query descriptions in,
//! deterministic SQL statement strings out.
//!
//! This crate provides:
//! - A tagged [`SqlValue`] type covering the native scalars plus
//!   disjunction lists, with boolean-to-integer coercion and quote-doubled
//!   text literals
//! - Clause formatters for `where`, `set`, `join`, column lists, and named
//!   `:column` placeholders
//! - A statement assembler dispatching on [`Action`] with
//!   `select`/`insert`/`update`/`delete` entry points
//!
//! ## Building statements
//!
//! ```rust
//! use strata_sql_core::{column_spec, select, update, QueryOptions};
//!
//! let sql = select(
//!     "todo",
//!     &QueryOptions::new().where_clause(column_spec! { "id" => 1 }),
//! )?;
//! assert_eq!(sql, "select * from todo where id = 1");
//!
//! let sql = update(
//!     "todo",
//!     &QueryOptions::new()
//!         .set(column_spec! { "date" => 2021 })
//!         .where_clause(column_spec! { "id" => 1 }),
//! )?;
//! assert_eq!(sql, "update todo set date = 2021 where id = 1");
//! # Ok::<(), strata_sql_core::BuildError>(())
//! ```
//!
//! ## Determinism
//!
//! The same description always renders the same bytes: mappings are
//! `BTreeMap`s, so multi-key clauses emit their keys in lexicographically
//! ascending order, while a disjunction list keeps the order it was given.
//! The builder performs no execution and never touches a connection; it
//! ends at producing the string.

pub mod builder;
pub mod error;

pub use builder::{
    build, column_spec, delete, insert, select, update, Action, ColumnSpec, JoinSpec, QueryOptions,
    Rows, SqlValue, ToSqlValue,
};
pub use error::BuildError;
