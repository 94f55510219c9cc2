//! The customer's in-progress selection.
//!
//! [`Cart`] is plain data with no I/O. The running `total` is adjusted by every
//! operation rather than recomputed, and always equals
//! `sum(line.price * line.quantity)`.

use crate::cart_actor::CartError;
use crate::model::Money;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// Menu item reference carried by cart and order lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub String);

impl From<&str> for MenuItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the menu hands to "add to cart".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl CartItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: MenuItemId(id.into()),
            name: name.into(),
            price,
            image: String::new(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: MenuItemId,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// Derived money figures for display and checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub item_count: u32,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

/// The whole-cart value written to the snapshot slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub items: Vec<CartLine>,
    pub total: Money,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLine>,
    total: Money,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Running sum of `price * quantity`.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities, not number of lines. Saturates at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    pub fn line(&self, id: &MenuItemId) -> Option<&CartLine> {
        self.items.iter().find(|line| &line.id == id)
    }

    /// Adds one unit. A known id bumps its line; an unknown one appends a line.
    ///
    /// Fails without touching the cart if the quantity or total would overflow.
    pub fn add_item(&mut self, item: CartItem) -> Result<(), CartError> {
        let too_large = || CartError::AmountTooLarge {
            id: item.id.to_string(),
        };
        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => {
                // the line keeps its first price; the total follows it
                let total = self.total.checked_add(line.price).ok_or_else(too_large)?;
                line.quantity = line.quantity.checked_add(1).ok_or_else(too_large)?;
                self.total = total;
            }
            None => {
                self.total = self.total.checked_add(item.price).ok_or_else(too_large)?;
                self.items.push(CartLine {
                    id: item.id,
                    name: item.name,
                    price: item.price,
                    quantity: 1,
                    image: item.image,
                    category: item.category,
                });
            }
        }
        Ok(())
    }

    /// Deletes the line. Returns false when the id is not in the cart.
    pub fn remove_item(&mut self, id: &MenuItemId) -> bool {
        let Some(index) = self.items.iter().position(|line| &line.id == id) else {
            return false;
        };
        let line = self.items.remove(index);
        self.total -= line.line_total();
        true
    }

    /// Sets a line's quantity.
    ///
    /// Quantities below one are rejected without touching the cart; removal is
    /// the only way to drop a line. Returns `Ok(false)` for an unknown id or an
    /// unchanged quantity.
    pub fn update_quantity(&mut self, id: &MenuItemId, quantity: i64) -> Result<bool, CartError> {
        let new_quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q >= 1)
            .ok_or_else(|| CartError::InvalidQuantity {
                id: id.to_string(),
                quantity,
            })?;
        let Some(line) = self.items.iter_mut().find(|line| &line.id == id) else {
            return Ok(false);
        };
        if line.quantity == new_quantity {
            return Ok(false);
        }
        if new_quantity > line.quantity {
            self.total = line
                .price
                .checked_times(new_quantity - line.quantity)
                .and_then(|delta| self.total.checked_add(delta))
                .ok_or_else(|| CartError::AmountTooLarge { id: id.to_string() })?;
        } else {
            self.total -= line.price.times(line.quantity - new_quantity);
        }
        line.quantity = new_quantity;
        Ok(true)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.total = Money::ZERO;
    }

    /// Takes checked-out quantities back out of the cart.
    ///
    /// Units added after the checkout read stay behind. Lines that reach zero
    /// are removed. Returns false when nothing matched.
    pub fn deduct(&mut self, checked_out: &[CartLine]) -> bool {
        let mut changed = false;
        for taken in checked_out {
            let Some(index) = self.items.iter().position(|line| line.id == taken.id) else {
                continue;
            };
            let line = &mut self.items[index];
            let removed = line.quantity.min(taken.quantity);
            if removed == 0 {
                continue;
            }
            line.quantity -= removed;
            self.total -= line.price.times(removed);
            if line.quantity == 0 {
                self.items.remove(index);
            }
            changed = true;
        }
        changed
    }

    /// Subtotal, rounded tax and their sum. The sum saturates at [`Money::MAX`].
    pub fn summary(&self, tax_rate_bps: u32) -> CartSummary {
        let tax = self.total.basis_points_rounded(tax_rate_bps);
        CartSummary {
            item_count: self.item_count(),
            subtotal: self.total,
            tax,
            total: self.total + tax,
        }
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total: self.total,
        }
    }

    /// Rebuilds a cart from a stored snapshot.
    ///
    /// Lines with a zero quantity are dropped, repeated ids are merged and the
    /// total is recomputed from the lines. A line whose amount would overflow
    /// the total is dropped. The flag is true when any of that changed what
    /// was stored.
    pub fn restore(snapshot: CartSnapshot) -> (Self, bool) {
        let mut cart = Cart::new();
        let mut repaired = false;
        for line in snapshot.items {
            if line.quantity == 0 || !cart.merge_line(line) {
                repaired = true;
            }
        }
        if cart.total != snapshot.total {
            repaired = true;
        }
        (cart, repaired)
    }

    /// Folds a stored line in. Returns false if it was dropped or merged.
    fn merge_line(&mut self, line: CartLine) -> bool {
        match self.items.iter_mut().find(|existing| existing.id == line.id) {
            Some(existing) => {
                // merged lines keep the first line's price
                let merged = existing.quantity.checked_add(line.quantity).zip(
                    existing
                        .price
                        .checked_times(line.quantity)
                        .and_then(|added| self.total.checked_add(added)),
                );
                if let Some((quantity, total)) = merged {
                    existing.quantity = quantity;
                    self.total = total;
                }
                false
            }
            None => match line
                .price
                .checked_times(line.quantity)
                .and_then(|added| self.total.checked_add(added))
            {
                Some(total) => {
                    self.total = total;
                    self.items.push(line);
                    true
                }
                None => false,
            },
        }
    }
}

/// One browsing session's cart, as held by the cart actor.
///
/// # Actor Framework
/// Implements [`ActorEntity`](actor_framework::ActorEntity) in
/// [`cart_actor::entity`](crate::cart_actor::entity).
#[derive(Debug, Clone, PartialEq)]
pub struct CartSession {
    pub id: CartId,
    pub session: String,
    pub cart: Cart,
    /// Storage problem not yet reported to the caller.
    pub notice: Option<String>,
}

/// Payload for opening a cart.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub session: String,
}

impl CartSession {
    pub fn new(id: CartId, session: impl Into<String>) -> Self {
        Self {
            id,
            session: session.into(),
            cart: Cart::new(),
            notice: None,
        }
    }

    /// Key of the persistence slot for this session.
    pub fn slot_key(&self) -> String {
        format!("cart:{}", self.session)
    }
}
