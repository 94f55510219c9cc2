//! # Loyalty Actor
//!
//! Customer accounts earning cashback and tier bonuses on completed orders.
//! The order actor credits accounts through a
//! [`LoyaltyClient`](crate::clients::LoyaltyClient) held in its context.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`LoyaltyAccount`]
//! - [`actions`] - [`LoyaltyAction`] and [`LoyaltyActionResult`]
//! - [`error`] - [`LoyaltyError`]
//!
//! [`LoyaltyAccount`]: crate::model::LoyaltyAccount

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::LoyaltyAccount;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Loyalty actor and its client.
pub fn new() -> (ResourceActor<LoyaltyAccount>, ResourceClient<LoyaltyAccount>) {
    ResourceActor::new(32)
}
