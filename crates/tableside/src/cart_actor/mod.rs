//! # Cart Actor
//!
//! One [`CartSession`] per browsing session, each wrapping the pure
//! [`Cart`](crate::model::Cart) aggregator.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation and [`CartContext`]
//! - [`actions`] - [`CartAction`] and the [`CartView`] every action returns
//! - [`store`] - [`SnapshotStore`] slots ([`MemoryStore`], [`FileStore`])
//! - [`error`] - [`CartError`]
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use tableside::cart_actor::{self, CartContext, MemoryStore};
//! use tableside::clients::CartClient;
//! use tableside::model::{CartItem, Money};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = cart_actor::new();
//!     let client = CartClient::new(generic_client);
//!     tokio::spawn(actor.run(CartContext {
//!         store: Arc::new(MemoryStore::new()),
//!         tax_rate_bps: 800,
//!     }));
//!
//!     let (cart_id, _) = client.open("table-4").await?;
//!     let view = client.add_item(cart_id, CartItem::new("naan", "Garlic naan", Money(400))).await?;
//!     assert_eq!(view.summary.total, Money(432));
//!     Ok(())
//! }
//! ```
//!
//! [`CartSession`]: crate::model::CartSession

pub mod actions;
pub mod entity;
pub mod error;
pub mod store;

pub use actions::*;
pub use entity::CartContext;
pub use error::*;
pub use store::*;

use crate::model::CartSession;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Cart actor and its client.
pub fn new() -> (ResourceActor<CartSession>, ResourceClient<CartSession>) {
    ResourceActor::new(32)
}
