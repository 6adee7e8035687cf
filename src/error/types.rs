//! Core error types for kindset
//!
//! This module defines the main error type used throughout the library.

use thiserror::Error;

use crate::element::Kind;

/// Main error type for set operations
///
/// Every variant leaves the set it was raised on unchanged: checks run before
/// the membership table is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetError {
    /// Two sets with different kinds were combined
    #[error("cannot perform the requested operation on mismatched sets; '{left}' != '{right}'")]
    KindMismatch {
        /// Kind of the receiver
        left: Kind,
        /// Kind of the other operand
        right: Kind,
    },

    /// An element's kind does not match the set's kind
    #[error("tried to insert value of kind '{found}' into a set of kind '{expected}'")]
    TypeViolation {
        /// Kind of the offending element
        found: Kind,
        /// Kind the set was declared with
        expected: Kind,
    },

    /// The operation would grow the set past its configured limit
    #[error("set limited to {limit} elements cannot hold {required}")]
    CapacityExceeded {
        /// Configured `MAX_ELEMENTS`
        limit: usize,
        /// Element count the operation would have produced
        required: usize,
    },
}

impl SetError {
    /// Returns true if this error comes from a kind check
    pub const fn is_kind_error(&self) -> bool {
        matches!(
            self,
            Self::KindMismatch { .. } | Self::TypeViolation { .. }
        )
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::KindMismatch { .. } => "Algebra",
            Self::TypeViolation { .. } => "Element",
            Self::CapacityExceeded { .. } => "Capacity",
        }
    }
}

/// Result type for set operations
pub type SetResult<T> = Result<T, SetError>;
