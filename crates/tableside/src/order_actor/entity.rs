//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders are validated in `from_create_params`, the linked customer is checked
//! against the loyalty actor in `on_create`, and status changes arrive as
//! [`OrderAction::Transition`]. Orders are never deleted.

use super::actions::{OrderAction, TransitionOutcome};
use super::error::OrderError;
use super::feed::{OrderEvent, OrderFeed};
use crate::clients::LoyaltyClient;
use crate::model::{
    Order, OrderCreate, OrderId, OrderStatus, OrderUpdate, PurchaseReward, StatusChange, TransitionPolicy,
};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

/// Dependencies of the order actor.
#[derive(Clone)]
pub struct OrderContext {
    pub loyalty: LoyaltyClient,
    pub feed: OrderFeed,
    pub policy: TransitionPolicy,
}

impl Order {
    fn event(&self, from: Option<OrderStatus>) -> OrderEvent {
        OrderEvent {
            order_id: self.id,
            restaurant: self.restaurant.clone(),
            table: self.table.clone(),
            from,
            to: self.status,
            display: self.status.display(),
            at: self.updated_at,
        }
    }

    /// Credits the linked customer once the order is completed.
    ///
    /// Returns the reward, or a notice when crediting failed. The transition
    /// stands either way.
    async fn credit_loyalty(&self, loyalty: &LoyaltyClient) -> (Option<PurchaseReward>, Option<String>) {
        let Some(customer) = self.customer else {
            return (None, None);
        };
        match loyalty.record_purchase(customer, self.id, self.amount).await {
            Ok(reward) => (Some(reward), None),
            Err(e) => {
                warn!(order_id = %self.id, %customer, error = %e, "Loyalty credit failed");
                (None, Some(format!("Loyalty points were not credited: {e}")))
            }
        }
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = TransitionOutcome;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Order::place(id, params, Utc::now())
    }

    /// Checks the linked customer exists, then announces the order.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        if let Some(customer) = self.customer {
            match ctx.loyalty.get(customer).await {
                Ok(Some(_)) => {}
                Ok(None) => {
                    return Err(OrderError::Validation(format!("unknown customer {customer}")));
                }
                Err(e) => return Err(OrderError::ActorCommunicationError(e.to_string())),
            }
        }
        info!(order_id = %self.id, restaurant = %self.restaurant, amount = %self.amount, "Order placed");
        ctx.feed.publish(&self.event(None));
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &OrderContext) -> Result<(), OrderError> {
        self.apply_update(update, Utc::now());
        Ok(())
    }

    async fn on_delete(&self, _ctx: &OrderContext) -> Result<(), OrderError> {
        Err(OrderError::Validation(format!("{} cannot be deleted", self.id)))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<TransitionOutcome, OrderError> {
        let OrderAction::Transition(to) = action;
        let StatusChange { from, to, .. } = self.transition(to, ctx.policy, Utc::now())?;
        info!(order_id = %self.id, %from, %to, "Status changed");
        ctx.feed.publish(&self.event(Some(from)));

        let (reward, notice) = if to == OrderStatus::Completed {
            self.credit_loyalty(&ctx.loyalty).await
        } else {
            (None, None)
        };

        Ok(TransitionOutcome {
            order_id: self.id,
            from,
            to,
            display: to.display(),
            updated_at: self.updated_at,
            reward,
            notice,
        })
    }
}
