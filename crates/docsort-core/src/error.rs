use std::fmt;
use thiserror::Error as ThisError;

///
/// SortError
///
/// Failures raised while building or running document comparators.
/// Every failure is synchronous and leaves no partial result behind.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SortError {
    /// Sort specification literal has an unsupported shape.
    #[error("bad sort specification: {reason}")]
    InvalidSpec { reason: String },

    /// Key vector width does not match the sort specification width.
    #[error("key has wrong length: expected {expected}, found {found}")]
    KeyLength { expected: usize, found: usize },

    /// Key extraction was requested for a specification with no fields.
    #[error("can't generate keys without a sort specification")]
    NoKeys,

    /// Distance tie-break reached a document with no precomputed distance.
    #[error("missing distance for {id}")]
    MissingDistance { id: String },
}

impl SortError {
    // Construct one spec-literal rejection.
    pub(crate) fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Classify this error for callers that route on error kind.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidSpec { .. } => ErrorClass::Unsupported,
            Self::KeyLength { .. } | Self::NoKeys | Self::MissingDistance { .. } => {
                ErrorClass::InvariantViolation
            }
        }
    }
}

///
/// ErrorClass
/// Coarse error taxonomy: caller input vs broken internal contract.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Unsupported,
    InvariantViolation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unsupported => "unsupported",
            Self::InvariantViolation => "invariant_violation",
        };
        write!(f, "{label}")
    }
}
