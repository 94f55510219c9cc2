//! Error types for the Loyalty actor.

use crate::model::Money;
use thiserror::Error;

/// Errors that can occur during loyalty operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoyaltyError {
    /// The requested account was not found.
    #[error("Loyalty account not found: {0}")]
    NotFound(String),

    /// The order has already been credited to this account.
    #[error("Order already credited: {0}")]
    DuplicateOrder(String),

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: Money, available: Money },

    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    /// The account data provided is invalid.
    #[error("Loyalty validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for LoyaltyError {
    fn from(msg: String) -> Self {
        LoyaltyError::ActorCommunicationError(msg)
    }
}
