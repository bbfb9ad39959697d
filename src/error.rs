//! Error types for message dispatch.
//!
//! Dispatchers that accept a symbolic name reject anything outside their
//! closed set of operations at the boundary. The rejection carries the
//! offending name so the caller can see what was sent.
//!
//! The lookup-table account does not use [`MessageError::UnknownRequest`]:
//! a missing member there is `None`, not an error.

use thiserror::Error;

/// Errors raised when a message cannot be dispatched or applied.
///
/// # Examples
///
/// ```rust
/// use message_passing::error::MessageError;
///
/// let error = MessageError::UnknownOperation("scale".to_string());
/// assert_eq!(error.to_string(), "Unknown op: scale");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// The complex-number dispatcher received a name it does not answer.
    #[error("Unknown op: {0}")]
    UnknownOperation(String),

    /// The account dispatcher received a message it does not understand.
    #[error("Unknown request: {0}")]
    UnknownRequest(String),

    /// A bound method was applied to the wrong number of arguments.
    #[error("{name} expects {expected} argument(s), got {found}")]
    Arity {
        /// Name of the method that was applied.
        name: &'static str,
        /// Number of arguments the method takes.
        expected: usize,
        /// Number of arguments supplied.
        found: usize,
    },

    /// A deposit or withdrawal would take the balance outside the range of
    /// its numeric type. The balance is left unchanged.
    #[error("{name} would overflow the balance")]
    Overflow {
        /// Name of the operation that overflowed.
        name: &'static str,
    },
}

impl MessageError {
    /// Returns the rejected name for the two unknown-name variants.
    #[must_use]
    pub fn rejected_name(&self) -> Option<&str> {
        match self {
            Self::UnknownOperation(name) | Self::UnknownRequest(name) => Some(name.as_str()),
            Self::Arity { .. } | Self::Overflow { .. } => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type MessageResult<T> = Result<T, MessageError>;
