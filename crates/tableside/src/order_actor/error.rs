//! Error types for the Order actor.

use crate::model::{Money, OrderStatus};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The declared amount differs from the sum of the lines.
    #[error("Order amount {declared} does not match item total {computed}")]
    AmountMismatch { declared: Money, computed: Money },

    /// The transition table has no edge from `from` to `to`.
    #[error("Cannot move order from {from} to {to}")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },

    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// Errors the caller caused and can fix; everything else is unexpected.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, OrderError::ActorCommunicationError(_))
    }
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
