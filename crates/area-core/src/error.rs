//! Error types for shape construction and queries

use std::fmt;

use thiserror::Error;

/// Shape errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AreaError {
    /// A value is NaN, or the values cannot describe a shape at all.
    #[error("Invalid argument `{param}`: {reason}")]
    InvalidArgument {
        param: &'static str,
        reason: &'static str,
    },

    /// A value is infinite or not strictly positive.
    #[error("Argument `{param}` out of range: {reason}")]
    OutOfRange {
        param: &'static str,
        reason: &'static str,
    },

    /// A query cannot be evaluated for this shape.
    #[error("Invalid operation: {0}")]
    InvalidOperation(&'static str),
}

/// Error category, without the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
    InvalidOperation,
}

impl AreaError {
    #[must_use]
    pub const fn invalid_argument(param: &'static str, reason: &'static str) -> Self {
        AreaError::InvalidArgument { param, reason }
    }

    #[must_use]
    pub const fn out_of_range(param: &'static str, reason: &'static str) -> Self {
        AreaError::OutOfRange { param, reason }
    }

    #[must_use]
    pub const fn invalid_operation(reason: &'static str) -> Self {
        AreaError::InvalidOperation(reason)
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AreaError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            AreaError::OutOfRange { .. } => ErrorKind::OutOfRange,
            AreaError::InvalidOperation(_) => ErrorKind::InvalidOperation,
        }
    }

    /// Name of the offending parameter, if the error is about one
    pub fn param(&self) -> Option<&'static str> {
        match self {
            AreaError::InvalidArgument { param, .. } | AreaError::OutOfRange { param, .. } => {
                Some(*param)
            }
            AreaError::InvalidOperation(_) => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::InvalidOperation => "invalid operation",
        };
        f.write_str(name)
    }
}

/// Result type for shape operations
pub type AreaResult<T> = Result<T, AreaError>;
