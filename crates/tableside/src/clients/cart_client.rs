//! # Cart Client
//!
//! High-level API for the `CartSession` actor.
use crate::cart_actor::{CartAction, CartError, CartView};
use crate::model::{CartCreate, CartId, CartItem, CartLine, CartSession, MenuItemId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartSession>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartSession>) -> Self {
        Self { inner }
    }

    /// Opens a cart for a session, restoring its saved snapshot if there is one.
    #[instrument(skip(self))]
    pub async fn open(&self, session: &str) -> Result<(CartId, CartView), CartError> {
        debug!("Sending request");
        let id = self
            .inner
            .create(CartCreate {
                session: session.to_string(),
            })
            .await
            .map_err(Self::map_error)?;
        let view = self.view(id).await?;
        Ok((id, view))
    }

    #[instrument(skip(self, item), fields(item = %item.id))]
    pub async fn add_item(&self, id: CartId, item: CartItem) -> Result<CartView, CartError> {
        self.act(id, CartAction::AddItem(item)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: CartId, item: MenuItemId) -> Result<CartView, CartError> {
        self.act(id, CartAction::RemoveItem(item)).await
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        id: CartId,
        item: MenuItemId,
        quantity: i64,
    ) -> Result<CartView, CartError> {
        self.act(id, CartAction::UpdateQuantity { id: item, quantity }).await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, id: CartId) -> Result<CartView, CartError> {
        self.act(id, CartAction::Clear).await
    }

    #[instrument(skip(self))]
    pub async fn view(&self, id: CartId) -> Result<CartView, CartError> {
        self.act(id, CartAction::View).await
    }

    /// Reads the cart without taking its pending notice.
    #[instrument(skip(self))]
    pub async fn peek(&self, id: CartId) -> Result<CartView, CartError> {
        self.act(id, CartAction::Peek).await
    }

    /// Takes checked-out lines back out of the cart, leaving anything added since.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn deduct(&self, id: CartId, lines: Vec<CartLine>) -> Result<CartView, CartError> {
        self.act(id, CartAction::Deduct(lines)).await
    }

    async fn act(&self, id: CartId, action: CartAction) -> Result<CartView, CartError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<CartSession> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<CartError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CartError::NotFound(id),
            Err(other) => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartSummary, Money};
    use actor_framework::mock::{create_mock_client, expect_action};

    fn empty_view(id: CartId) -> CartView {
        CartView {
            cart_id: id,
            session: "s".into(),
            items: Vec::new(),
            summary: CartSummary {
                item_count: 0,
                subtotal: Money::ZERO,
                tax: Money::ZERO,
                total: Money::ZERO,
            },
            changed: false,
            notice: None,
        }
    }

    #[tokio::test]
    async fn test_update_quantity_sends_the_requested_values() {
        let (client, mut receiver) = create_mock_client::<CartSession>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move {
            cart_client
                .update_quantity(CartId(1), "naan".into(), 3)
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CartId(1));
        match action {
            CartAction::UpdateQuantity { id, quantity } => {
                assert_eq!(id, MenuItemId::from("naan"));
                assert_eq!(quantity, 3);
            }
            other => panic!("Expected UpdateQuantity, got {other:?}"),
        }
        responder.send(Ok(empty_view(CartId(1)))).unwrap();

        assert_eq!(task.await.unwrap().unwrap().cart_id, CartId(1));
    }

    #[tokio::test]
    async fn test_entity_errors_come_back_typed() {
        let (client, mut receiver) = create_mock_client::<CartSession>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move {
            cart_client
                .update_quantity(CartId(1), "naan".into(), 0)
                .await
        });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        let rejected = CartError::InvalidQuantity {
            id: "naan".into(),
            quantity: 0,
        };
        responder
            .send(Err(FrameworkError::EntityError(Box::new(rejected.clone()))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap_err(), rejected);
    }

    #[tokio::test]
    async fn test_missing_cart_maps_to_not_found() {
        let (client, mut receiver) = create_mock_client::<CartSession>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move { cart_client.view(CartId(9)).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::NotFound("cart_9".into())))
            .unwrap();

        assert_eq!(
            task.await.unwrap().unwrap_err(),
            CartError::NotFound("cart_9".into())
        );
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<CartSession>(10);
        drop(receiver);
        let cart_client = CartClient::new(client);

        assert!(matches!(
            cart_client.clear(CartId(1)).await,
            Err(CartError::ActorCommunicationError(_))
        ));
    }
}
