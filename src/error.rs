//! Error types for balisage.
//!
//! Every failure is scoped to the single operation that raised it; nothing
//! is retried internally.

use thiserror::Error;

/// Errors that can occur while building, mutating or persisting markup.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// A class looked up by original or sanitized name does not exist
    #[error("Class '{0}' not found")]
    ClassNotFound(String),

    /// An attribute key does not exist
    #[error("Attribute '{0}' not found")]
    AttributeNotFound(String),

    /// A child's type is not one of the allowed types
    #[error("Got {got}, expected one of ({allowed})")]
    TypeConstraint {
        /// Display form of the rejected child's type
        got: String,
        /// Comma-separated display form of the allowed types
        allowed: String,
    },

    /// A mutation would push a collection past its maximum length
    #[error(
        "{proposed} {} would exceed the maximum number of elements ({max})",
        pluralize(.proposed)
    )]
    Capacity {
        /// Number of children the mutation would produce
        proposed: usize,
        /// Configured maximum
        max: usize,
    },

    /// A configuration value was rejected
    #[error("{0}")]
    InvalidConfiguration(String),

    /// A positional operation referenced an index past the end
    #[error("index {index} is out of range for {len} {}", pluralize(.len))]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Current number of children
        len: usize,
    },

    /// Writing serialized output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn pluralize(count: &usize) -> &'static str {
    if *count == 1 { "element" } else { "elements" }
}

/// Coarse classification of [`MarkupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    TypeConstraint,
    Capacity,
    InvalidConfiguration,
    IndexOutOfRange,
    Io,
}

/// Result type alias for markup operations.
pub type MarkupResult<T> = Result<T, MarkupError>;

impl MarkupError {
    /// Create an invalid configuration error with a message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ClassNotFound(_) | Self::AttributeNotFound(_) => ErrorKind::NotFound,
            Self::TypeConstraint { .. } => ErrorKind::TypeConstraint,
            Self::Capacity { .. } => ErrorKind::Capacity,
            Self::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MarkupError::ClassNotFound("cl@ss99".to_string());
        assert_eq!(err.to_string(), "Class 'cl@ss99' not found");

        let err = MarkupError::AttributeNotFound("does-not-exist".to_string());
        assert_eq!(err.to_string(), "Attribute 'does-not-exist' not found");

        let err = MarkupError::TypeConstraint {
            got: "<br>".to_string(),
            allowed: "text".to_string(),
        };
        assert_eq!(err.to_string(), "Got <br>, expected one of (text)");
    }

    #[test]
    fn test_capacity_pluralization() {
        let err = MarkupError::Capacity { proposed: 3, max: 2 };
        assert_eq!(
            err.to_string(),
            "3 elements would exceed the maximum number of elements (2)"
        );

        let err = MarkupError::Capacity { proposed: 1, max: 0 };
        assert_eq!(
            err.to_string(),
            "1 element would exceed the maximum number of elements (0)"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(MarkupError::ClassNotFound("a".into()).kind(), ErrorKind::NotFound);
        assert_eq!(MarkupError::AttributeNotFound("a".into()).kind(), ErrorKind::NotFound);
        assert_eq!(MarkupError::invalid("bad").kind(), ErrorKind::InvalidConfiguration);
        assert_eq!(
            MarkupError::IndexOutOfRange { index: 4, len: 1 }.to_string(),
            "index 4 is out of range for 1 element"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MarkupError>();
    }
}
