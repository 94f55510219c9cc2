//! Live order events.
//!
//! Every placed order and every accepted transition is published to two
//! rooms: the restaurant's and the order's own. A kitchen dashboard follows the
//! first, a customer's tracker the second. Delivery is best effort, with no
//! replay for late subscribers.

use crate::model::{OrderId, OrderStatus, RestaurantId, StatusDisplay};
use actor_framework::EventHub;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Display;
use tokio::sync::broadcast;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Room {
    Restaurant(RestaurantId),
    Order(OrderId),
}

impl Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Room::Restaurant(id) => write!(f, "restaurant:{id}"),
            Room::Order(id) => write!(f, "order:{}", id.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEvent {
    pub order_id: OrderId,
    pub restaurant: RestaurantId,
    pub table: String,
    /// `None` when the order was just placed.
    pub from: Option<OrderStatus>,
    pub to: OrderStatus,
    pub display: StatusDisplay,
    pub at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct OrderFeed {
    hub: EventHub<Room, OrderEvent>,
}

impl OrderFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            hub: EventHub::new(capacity),
        }
    }

    pub fn subscribe(&self, room: Room) -> broadcast::Receiver<OrderEvent> {
        self.hub.subscribe(room)
    }

    pub fn subscribe_restaurant(&self, restaurant: &RestaurantId) -> broadcast::Receiver<OrderEvent> {
        self.subscribe(Room::Restaurant(restaurant.clone()))
    }

    pub fn subscribe_order(&self, order_id: OrderId) -> broadcast::Receiver<OrderEvent> {
        self.subscribe(Room::Order(order_id))
    }

    /// Publishes to the restaurant room and the order room. Returns the total
    /// number of receivers reached.
    pub fn publish(&self, event: &OrderEvent) -> usize {
        let reached = self
            .hub
            .publish(&Room::Restaurant(event.restaurant.clone()), event.clone())
            + self.hub.publish(&Room::Order(event.order_id), event.clone());
        debug!(order_id = %event.order_id, to = %event.to, reached, "Order event published");
        reached
    }
}
