//! Error types for the Cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// A quantity below one was requested. The cart is unchanged.
    #[error("Quantity for {id} must be at least 1 (got {quantity})")]
    InvalidQuantity { id: String, quantity: i64 },

    /// The change would push a line or the cart total past what [`Money`]
    /// can hold. The cart is unchanged.
    ///
    /// [`Money`]: crate::model::Money
    #[error("Cart amount too large after changing {id}")]
    AmountTooLarge { id: String },

    /// A cart was opened without a session key.
    #[error("Cart session key is empty")]
    EmptySession,

    /// The requested cart was not found.
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
