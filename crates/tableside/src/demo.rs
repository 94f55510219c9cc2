//! Scripted status walk for demos.
//!
//! Drives an order through the kitchen on a timer using the same transition
//! call the dashboard uses. Only the binary calls this.

use crate::clients::OrderClient;
use crate::model::{OrderId, OrderStatus};
use crate::order_actor::{OrderError, TransitionOutcome};
use std::time::Duration;
use tracing::{info, instrument, warn};

pub const PROGRESSION: [OrderStatus; 3] = [
    OrderStatus::Preparing,
    OrderStatus::Ready,
    OrderStatus::Completed,
];

/// Walks `Pending → Preparing → Ready → Completed`, sleeping `step_delay`
/// before each step.
///
/// Stops at the first rejected step, for example when staff cancelled the
/// order meanwhile, and returns the outcomes of the steps that were applied
/// along with the rejection.
#[instrument(skip(orders))]
pub async fn simulate_progression(
    orders: &OrderClient,
    order_id: OrderId,
    step_delay: Duration,
) -> (Vec<TransitionOutcome>, Option<OrderError>) {
    let mut applied = Vec::with_capacity(PROGRESSION.len());
    for status in PROGRESSION {
        tokio::time::sleep(step_delay).await;
        match orders.transition(order_id, status).await {
            Ok(outcome) => {
                info!(%order_id, status = %outcome.to, label = outcome.display.label, "Simulated step");
                applied.push(outcome);
            }
            Err(e) => {
                warn!(%order_id, %status, error = %e, "Simulation stopped");
                return (applied, Some(e));
            }
        }
    }
    (applied, None)
}
