//! # Order Client
//!
//! High-level API for the `Order` actor: placing orders, checkout from a cart,
//! status transitions and the `{ orderId, newStatus }` status-update call.
use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::model::{
    CartId, Order, OrderCreate, OrderId, OrderLine, OrderStatus, OrderUpdate, RestaurantId,
};
use crate::order_actor::{
    CheckoutReceipt, CheckoutRequest, OrderAction, OrderError, StatusUpdateRequest,
    StatusUpdateResponse, TransitionOutcome,
};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, error, info, instrument, warn};

/// Client for interacting with the Order actor.
///
/// Validation, the customer check and the loyalty credit all happen inside the
/// Order actor's hooks.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(restaurant = %params.restaurant, amount = %params.amount))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Turns the cart into an order and takes the ordered lines out of the cart.
    ///
    /// The order amount is the cart subtotal. The lines are deducted only after
    /// the order was accepted, and only the quantities that were ordered, so
    /// items added meanwhile stay in the cart. If the deduction fails the order
    /// still stands.
    #[instrument(skip(self, carts, request))]
    pub async fn checkout(
        &self,
        carts: &CartClient,
        cart_id: CartId,
        request: CheckoutRequest,
    ) -> Result<CheckoutReceipt, OrderError> {
        let view = carts.peek(cart_id).await.map_err(|e| match e {
            CartError::NotFound(id) => OrderError::Validation(format!("cart {id} not found")),
            other => OrderError::ActorCommunicationError(other.to_string()),
        })?;
        if view.is_empty() {
            return Err(OrderError::Validation("cart is empty".into()));
        }

        let order_id = self
            .place_order(OrderCreate {
                restaurant: request.restaurant,
                table: request.table,
                amount: view.summary.subtotal,
                items: view.items.iter().cloned().map(OrderLine::from).collect(),
                customer: request.customer,
                customer_name: request.customer_name,
            })
            .await?;

        let cart = match carts.deduct(cart_id, view.items).await {
            Ok(cart) => Some(cart),
            Err(e) => {
                warn!(%cart_id, %order_id, error = %e, "Cart not updated after checkout");
                None
            }
        };
        info!(%cart_id, %order_id, "Checked out");
        Ok(CheckoutReceipt { order_id, cart })
    }

    #[instrument(skip(self))]
    pub async fn transition(&self, id: OrderId, to: OrderStatus) -> Result<TransitionOutcome, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::Transition(to))
            .await
            .map_err(Self::map_error)
    }

    /// Answers a status-update call. Never fails; problems come back as
    /// `success: false` with a message for the user.
    #[instrument(skip(self))]
    pub async fn update_status(&self, request: &StatusUpdateRequest) -> StatusUpdateResponse {
        let Ok(id) = request.order_id.parse::<OrderId>() else {
            return StatusUpdateResponse::failed(format!("Invalid order id: {}", request.order_id));
        };
        let to = match request.new_status.parse::<OrderStatus>() {
            Ok(status) => status,
            Err(e) => {
                return StatusUpdateResponse::failed(OrderError::UnknownStatus(e.0).to_string());
            }
        };

        match self.transition(id, to).await {
            Ok(outcome) => {
                let mut message = format!("Order {} is now {}", outcome.order_id, outcome.to);
                if let Some(notice) = outcome.notice {
                    message.push_str(&format!(". {notice}"));
                }
                StatusUpdateResponse::ok(message)
            }
            Err(e) if e.is_user_facing() => StatusUpdateResponse::failed(e.to_string()),
            Err(e) => {
                error!(order_id = %id, error = %e, "Status update failed");
                StatusUpdateResponse::failed("Failed to update order status")
            }
        }
    }

    /// Edits payment status or customer name.
    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// A restaurant's orders, newest first, optionally of one status.
    #[instrument(skip(self))]
    pub async fn list_for_restaurant(
        &self,
        restaurant: &RestaurantId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, OrderError> {
        let mut orders: Vec<Order> = self
            .list()
            .await?
            .into_iter()
            .filter(|order| &order.restaurant == restaurant)
            .filter(|order| status.map_or(true, |s| order.status == s))
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(orders)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
