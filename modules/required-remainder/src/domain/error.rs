use std::fmt;

use thiserror::Error;

use super::model::RemainderQuery;

/// Input field of a [`RemainderQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    X,
    Y,
    N,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::N => "n",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-item failures. Neither variant ever fails a whole batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The triple violates one of the range constraints.
    #[error("{message}")]
    Validation { field: Field, message: &'static str },

    /// The closed-form result broke its postcondition `0 <= k <= n`.
    /// Unreachable for validated input; signals an arithmetic regression.
    #[error("No valid solution found for the given constraints")]
    NoSolution { query: RemainderQuery },
}

impl DomainError {
    #[must_use]
    pub const fn validation(field: Field, message: &'static str) -> Self {
        Self::Validation { field, message }
    }

    #[must_use]
    pub const fn no_solution(query: RemainderQuery) -> Self {
        Self::NoSolution { query }
    }

    /// Offending field for validation failures.
    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            Self::NoSolution { .. } => None,
        }
    }
}
