//! # Actor Framework
//!
//! Building blocks for resource-oriented actors on Tokio: every resource type
//! (a cart, an order, a loyalty account) lives inside its own actor task, is
//! reached through a typed client, and exposes the same CRUD surface plus
//! resource-specific actions.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the domain type and its hooks.
//! 2. **Runtime** ([`ResourceActor`]) - the inbox loop that owns the store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed request/response.
//! 4. **Fan-out** ([`EventHub`]) - topic-keyed broadcast for pushing state
//!    changes to whoever is watching.
//!
//! ## Context Injection
//!
//! Dependencies arrive through `run(context)`, after every actor has been
//! created, so an order actor can hold the loyalty client without either side
//! knowing about the other at construction time:
//!
//! ```rust,ignore
//! let (loyalty_actor, loyalty_client) = ResourceActor::<LoyaltyAccount>::new(32);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32);
//! tokio::spawn(loyalty_actor.run(program));
//! tokio::spawn(order_actor.run(OrderContext { loyalty: loyalty_client, .. }));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Messages are processed sequentially within an actor; no locks around entity state.
//! - Different actors run in parallel and talk only through clients.
//! - Dropping every client of an actor ends its loop.
//!
//! ## Testing
//!
//! [`mock`] provides `MockClient` (queued canned replies) and
//! `create_mock_client` (answer requests by hand) so client wrappers and
//! dependent actors can be tested without the real dependency.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod hub;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use hub::EventHub;
pub use message::{ResourceRequest, Response};
