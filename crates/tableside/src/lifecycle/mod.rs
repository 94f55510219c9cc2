//! # System Lifecycle & Orchestration
//!
//! Creates the cart, order and loyalty actors, wires them together through
//! their contexts and shuts them down.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created first and receive their dependencies in `run(context)`:
//!
//! ```rust,ignore
//! // Cart: snapshot slot and tax rate
//! impl ActorEntity for CartSession { type Context = CartContext; }
//!
//! // Loyalty: the program rules
//! impl ActorEntity for LoyaltyAccount { type Context = LoyaltyProgram; }
//!
//! // Order: loyalty client, live feed, transition policy
//! impl ActorEntity for Order { type Context = OrderContext; }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each inbox
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every actor task
//!
//! The order actor holds a clone of the loyalty client, so the loyalty actor
//! stops only after the order actor has. The graph is acyclic, so channel
//! closure is enough.

pub mod order_system;

pub use order_system::*;
