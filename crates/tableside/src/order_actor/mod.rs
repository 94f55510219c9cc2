//! # Order Actor
//!
//! Placed orders and their status lifecycle.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation and [`OrderContext`]
//! - [`actions`] - [`OrderAction`], [`TransitionOutcome`] and the status-update call shape
//! - [`feed`] - [`OrderFeed`] rooms and [`OrderEvent`]
//! - [`error`] - [`OrderError`]
//!
//! ## Transitions
//!
//! ```rust,ignore
//! let outcome = order_client.transition(order_id, OrderStatus::Ready).await?;
//! assert_eq!(outcome.display.icon, "bell");
//! ```
//!
//! Under [`TransitionPolicy::Enforced`](crate::model::TransitionPolicy) a move
//! the table does not list fails with [`OrderError::IllegalTransition`] and the
//! order is left as it was. Completing an order with a linked customer credits
//! the loyalty account; if that fails the completion still stands and the
//! outcome carries a notice.

pub mod actions;
pub mod entity;
pub mod error;
pub mod feed;

pub use actions::*;
pub use entity::OrderContext;
pub use error::*;
pub use feed::*;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32)
}
