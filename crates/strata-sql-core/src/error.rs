//! Builder error types.

/// An error produced while assembling a statement from a query description.
///
/// Well-formed descriptions never fail; the only failure mode is a
/// description the type system cannot rule out, such as a join spec that
/// does not name exactly two tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The query description is structurally invalid.
    MalformedQuerySpec(String),
}

impl BuildError {
    /// Creates a malformed-spec error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedQuerySpec(message.into())
    }
}

impl core::fmt::Display for BuildError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedQuerySpec(message) => {
                write!(f, "malformed query spec: {message}")
            }
        }
    }
}

impl std::error::Error for BuildError {}
