//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the compact `tracing-subscriber` formatter used by
//! every binary in the workspace. Filtering comes from `RUST_LOG`; when it is
//! unset the caller's default level applies.
//!
//! ```bash
//! RUST_LOG=info cargo run            # lifecycle and state changes
//! RUST_LOG=debug cargo run           # full payloads on every request
//! RUST_LOG=actor_framework=debug,tableside=info cargo run
//! ```
//!
//! With `info` an order moving through the kitchen reads like:
//!
//! ```text
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO transition: Status changed order_id=order_1 from=pending to=preparing
//! INFO Action ok entity_type="Order" id=order_1
//! ```
//!
//! Module paths are hidden (`with_target(false)`); the `entity_type` field
//! already says which actor spoke.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
