//! Errors raised by optional-value operations.

use thiserror::Error;

/// Errors raised by [`Optional`](crate::Optional) operations.
///
/// Only extraction and decoding can fail. Every other combinator is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionalError {
    /// [`value`](crate::value) was called on an absent optional.
    #[error("value called on empty optional")]
    EmptyOptional,

    /// A list-encoded optional had more than one element.
    #[error("invalid optional representation: expected a list of at most one element, found {len}")]
    InvalidRepresentation {
        /// Length of the rejected list.
        len: usize,
    },
}

/// Result type for optional-value operations.
pub type OptionalResult<T> = Result<T, OptionalError>;
