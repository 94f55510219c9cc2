//! Custom actions for the Order actor, and the status-update call shape.

use crate::cart_actor::CartView;
use crate::model::{CustomerId, OrderId, OrderStatus, PurchaseReward, RestaurantId, StatusDisplay};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to a new status, subject to the transition policy.
    Transition(OrderStatus),
}

/// What an accepted transition did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionOutcome {
    pub order_id: OrderId,
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub display: StatusDisplay,
    pub updated_at: DateTime<Utc>,
    /// Loyalty credit earned when the order completed.
    pub reward: Option<PurchaseReward>,
    /// Set when a side effect failed without undoing the transition.
    pub notice: Option<String>,
}

/// Body of a status-update call: `{ "orderId": "...", "newStatus": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub order_id: String,
    pub new_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateResponse {
    pub success: bool,
    pub message: String,
}

impl StatusUpdateResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Where and for whom a cart is checked out.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub restaurant: RestaurantId,
    pub table: String,
    pub customer: Option<CustomerId>,
    pub customer_name: Option<String>,
}

/// What a checkout produced.
#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
    pub order_id: OrderId,
    /// The cart after the checked-out lines were taken out, including any
    /// storage notice. `None` when the cart could not be updated.
    pub cart: Option<CartView>,
}
