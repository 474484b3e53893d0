//! # strata-orm
//!
//! A thin object layer over the strata-sql statement builder.
//!
//! This crate provides:
//! - A [`Model`] trait naming a table, its columns, and its primary key
//! - A [`Manager`] performing CRUD against SQLite through sqlx, with every
//!   statement rendered by `strata-sql-core`
//!
//! The layer stays deliberately thin: it describes each operation as a
//! `QueryOptions`, hands the builder's string to sqlx, and binds insert
//! values to the builder's positional placeholders. It adds no query
//! planning, caching, or schema management of its own.
//!
//! ## Quick start
//!
//! ```ignore
//! use sqlx::SqlitePool;
//! use strata_orm::{Model, Result};
//! use strata_sql_core::column_spec;
//!
//! async fn example(pool: &SqlitePool) -> Result<()> {
//!     let todo = Todo::objects().get(pool, 1).await?;
//!
//!     let open = Todo::objects()
//!         .find(pool, column_spec! { "act" => vec!["open", "overdue"] })
//!         .await?;
//!
//!     Todo::objects()
//!         .update(
//!             pool,
//!             column_spec! { "date" => 2021 },
//!             column_spec! { "id" => 1 },
//!         )
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod error;
mod manager;
mod model;

pub use error::{OrmError, Result};
pub use manager::Manager;
pub use model::Model;

// Re-export commonly used types from strata-sql-core
pub use strata_sql_core::{ColumnSpec, QueryOptions, Rows, SqlValue, ToSqlValue};
