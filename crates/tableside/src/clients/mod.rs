//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each wrapper recovers its actor's own error enum from
//! [`FrameworkError`](actor_framework::FrameworkError), so callers match on
//! `CartError::InvalidQuantity` or `OrderError::IllegalTransition` rather than
//! on strings.

pub mod cart_client;
pub mod loyalty_client;
pub mod order_client;

pub use cart_client::*;
pub use loyalty_client::*;
pub use order_client::*;
