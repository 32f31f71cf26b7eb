//! Error types for the Cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The requested cart line was not found.
    #[error("Cart item not found: {0}")]
    NotFound(String),

    /// A line must hold at least one unit and no more than `u32::MAX`.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u64),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
