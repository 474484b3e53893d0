//! Error types for the object layer.

use strata_sql_core::BuildError;
use thiserror::Error;

/// Object-layer errors.
#[derive(Debug, Error)]
pub enum OrmError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No object found matching the query.
    #[error("object not found")]
    NotFound,

    /// Statement construction failed.
    #[error("statement construction failed: {0}")]
    Build(#[from] BuildError),

    /// A disjunction list reached a parameter position.
    #[error("cannot bind a list value as a statement parameter")]
    NonScalarParameter,
}

/// Result type alias for object-layer operations.
pub type Result<T> = std::result::Result<T, OrmError>;
