//! Custom actions for the Cart actor.
//!
//! Every action answers with a [`CartView`]: the lines, the derived money
//! figures, whether the action changed anything and any storage notice to show
//! the customer.

use crate::model::{CartId, CartItem, CartLine, CartSummary, MenuItemId};
use serde::Serialize;

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit of a menu item.
    AddItem(CartItem),
    /// Drops a line entirely. Unknown ids are ignored.
    RemoveItem(MenuItemId),
    /// Sets a line's quantity. Values below one are rejected.
    UpdateQuantity { id: MenuItemId, quantity: i64 },
    Clear,
    /// Takes the quantities of these lines back out. Checkout uses it so that
    /// units added after its read survive.
    Deduct(Vec<CartLine>),
    /// Read-only. Hands over any pending notice.
    View,
    /// Read-only. Leaves a pending notice for the next view.
    Peek,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub cart_id: CartId,
    pub session: String,
    pub items: Vec<CartLine>,
    pub summary: CartSummary,
    pub changed: bool,
    /// Set when the snapshot slot could not be read or written.
    pub notice: Option<String>,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
