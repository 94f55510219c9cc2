//! # Tableside
//!
//! Restaurant ordering on the resource-actor framework: a cart per browsing
//! session, orders with a guarded status lifecycle, loyalty rewards and a live
//! order feed.
//!
//! - **[model]**: pure data ([`Cart`](model::Cart), [`Order`](model::Order),
//!   [`LoyaltyAccount`](model::LoyaltyAccount)) and their rules
//! - **[cart_actor]**, **[order_actor]**, **[loyalty_actor]**: the
//!   [`ActorEntity`](actor_framework::ActorEntity) implementations
//! - **[clients]**: typed wrappers that hide the message passing
//! - **[lifecycle]**: [`OrderSystem`](lifecycle::OrderSystem) wiring and shutdown
//! - **[analytics]**: dashboard figures
//! - **[demo]**: the timer-driven status walk used by the binary
//!
//! See [`actor_framework::mock`] for testing clients without spawning actors.

pub mod analytics;
pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod demo;
pub mod errors;
pub mod lifecycle;
pub mod loyalty_actor;
pub mod model;
pub mod order_actor;
