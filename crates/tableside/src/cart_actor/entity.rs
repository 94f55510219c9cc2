//! [`ActorEntity`] implementation for [`CartSession`].
//!
//! The arithmetic lives in [`Cart`]; this layer adds the snapshot slot. Slot
//! failures never block or undo a cart change. They are logged and handed to
//! the caller once, as the `notice` of the next [`CartView`].

use super::actions::{CartAction, CartView};
use super::error::CartError;
use super::store::SnapshotStore;
use crate::model::{Cart, CartCreate, CartId, CartSession};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Dependencies of the cart actor.
#[derive(Clone)]
pub struct CartContext {
    pub store: Arc<dyn SnapshotStore>,
    pub tax_rate_bps: u32,
}

impl CartSession {
    async fn persist(&mut self, store: &dyn SnapshotStore) {
        let key = self.slot_key();
        if let Err(e) = store.save(&key, &self.cart.snapshot()).await {
            warn!(cart_id = %self.id, %key, error = %e, "Cart snapshot not saved");
            self.notice = Some("Your cart could not be saved on this device".to_string());
        }
    }

    fn view(&mut self, tax_rate_bps: u32, changed: bool) -> CartView {
        let mut view = self.peek(tax_rate_bps);
        view.changed = changed;
        view.notice = self.notice.take();
        view
    }

    fn peek(&self, tax_rate_bps: u32) -> CartView {
        CartView {
            cart_id: self.id,
            session: self.session.clone(),
            items: self.cart.items().to_vec(),
            summary: self.cart.summary(tax_rate_bps),
            changed: false,
            notice: self.notice.clone(),
        }
    }
}

#[async_trait]
impl ActorEntity for CartSession {
    type Id = CartId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartView;
    type Context = CartContext;
    type Error = CartError;

    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, CartError> {
        if params.session.trim().is_empty() {
            return Err(CartError::EmptySession);
        }
        Ok(CartSession::new(id, params.session))
    }

    /// Replays the session's snapshot, if one was saved.
    async fn on_create(&mut self, ctx: &CartContext) -> Result<(), CartError> {
        let key = self.slot_key();
        match ctx.store.load(&key).await {
            Ok(Some(snapshot)) => {
                let (cart, repaired) = Cart::restore(snapshot);
                if repaired {
                    warn!(cart_id = %self.id, %key, "Stored cart was inconsistent and has been repaired");
                    self.notice = Some("Some items in your saved cart could not be restored".to_string());
                }
                info!(cart_id = %self.id, items = cart.item_count(), "Cart restored");
                self.cart = cart;
            }
            Ok(None) => {}
            Err(e) => {
                warn!(cart_id = %self.id, %key, error = %e, "Cart snapshot not loaded");
                self.notice = Some("Your saved cart could not be loaded".to_string());
            }
        }
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &CartContext) -> Result<(), CartError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<CartView, CartError> {
        let changed = match action {
            CartAction::AddItem(item) => {
                self.cart.add_item(item)?;
                true
            }
            CartAction::RemoveItem(id) => self.cart.remove_item(&id),
            CartAction::UpdateQuantity { id, quantity } => self.cart.update_quantity(&id, quantity)?,
            CartAction::Clear => {
                let had_items = !self.cart.is_empty();
                self.cart.clear();
                had_items
            }
            CartAction::Deduct(lines) => self.cart.deduct(&lines),
            CartAction::View => false,
            CartAction::Peek => return Ok(self.peek(ctx.tax_rate_bps)),
        };
        if changed {
            self.persist(ctx.store.as_ref()).await;
        }
        Ok(self.view(ctx.tax_rate_bps, changed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_actor::MemoryStore;
    use crate::model::{CartItem, Money};

    fn context() -> CartContext {
        CartContext {
            store: Arc::new(MemoryStore::new()),
            tax_rate_bps: 800,
        }
    }

    #[tokio::test]
    async fn peek_leaves_the_notice_for_the_next_view() {
        let ctx = context();
        let mut session = CartSession::new(CartId(1), "table-3");
        session.notice = Some("Your cart could not be saved on this device".into());

        let peeked = session.handle_action(CartAction::Peek, &ctx).await.unwrap();
        assert!(peeked.notice.is_some());

        let viewed = session.handle_action(CartAction::View, &ctx).await.unwrap();
        assert_eq!(viewed.notice, peeked.notice);
        let again = session.handle_action(CartAction::View, &ctx).await.unwrap();
        assert!(again.notice.is_none());
    }

    #[tokio::test]
    async fn deduct_persists_what_is_left() {
        let store = Arc::new(MemoryStore::new());
        let ctx = CartContext {
            store: store.clone(),
            tax_rate_bps: 800,
        };
        let mut session = CartSession::new(CartId(1), "table-3");
        let tea = CartItem::new("tea", "Masala chai", Money(300));

        let view = session.handle_action(CartAction::AddItem(tea.clone()), &ctx).await.unwrap();
        session.handle_action(CartAction::AddItem(tea), &ctx).await.unwrap();

        let left = session
            .handle_action(CartAction::Deduct(view.items), &ctx)
            .await
            .unwrap();
        assert!(left.changed);
        assert_eq!(left.summary.subtotal, Money(300));

        let stored = store.load("cart:table-3").await.unwrap().unwrap();
        assert_eq!(stored.items[0].quantity, 1);
        assert_eq!(stored.total, Money(300));
    }
}
