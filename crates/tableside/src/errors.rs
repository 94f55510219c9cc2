use crate::cart_actor::CartError;
use crate::loyalty_actor::LoyaltyError;
use crate::order_actor::OrderError;
use thiserror::Error;

/// Application-level errors for the binary and system setup.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Actor task failed: {0}")]
    ActorTask(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Loyalty(#[from] LoyaltyError),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
