/// A placed order and its lifecycle.
///
/// # Actor Framework
/// [`Order`] implements [`ActorEntity`](actor_framework::ActorEntity) in
/// [`order_actor::entity`](crate::order_actor::entity); this module holds the
/// data and the synchronous transition rules.
use crate::model::{CartLine, CustomerId, MenuItemId, Money, OrderStatus, PaymentStatus, TransitionPolicy};
use crate::order_actor::OrderError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = std::num::ParseIntError;

    /// Accepts `order_12` or `12`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.strip_prefix("order_").unwrap_or(s).parse().map(OrderId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(pub String);

impl From<&str> for RestaurantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub const UNCATEGORIZED: &str = "uncategorized";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: MenuItemId,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
    #[serde(default)]
    pub image: String,
    pub category: String,
}

impl OrderLine {
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

impl From<CartLine> for OrderLine {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.id,
            name: line.name,
            price: line.price,
            quantity: line.quantity,
            image: line.image,
            category: line.category.unwrap_or_else(|| UNCATEGORIZED.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub restaurant: RestaurantId,
    pub table: String,
    pub items: Vec<OrderLine>,
    pub amount: Money,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub customer: Option<CustomerId>,
    pub customer_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub history: Vec<StatusChange>,
}

/// Payload for placing an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub restaurant: RestaurantId,
    pub table: String,
    pub items: Vec<OrderLine>,
    pub amount: Money,
    pub customer: Option<CustomerId>,
    pub customer_name: Option<String>,
}

/// Payload for editing an order outside its status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub payment_status: Option<PaymentStatus>,
    pub customer_name: Option<String>,
}

impl Order {
    /// Builds a pending, unpaid order after checking the payload.
    ///
    /// The declared amount must match the lines; it is not recomputed later.
    pub fn place(id: OrderId, params: OrderCreate, now: DateTime<Utc>) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::Validation("order has no items".into()));
        }
        if let Some(line) = params.items.iter().find(|line| line.quantity == 0) {
            return Err(OrderError::Validation(format!("{} has quantity 0", line.id)));
        }
        if params.table.trim().is_empty() {
            return Err(OrderError::Validation("table is required".into()));
        }
        let computed = params
            .items
            .iter()
            .map(|line| line.price.checked_times(line.quantity))
            .collect::<Option<Vec<_>>>()
            .and_then(Money::checked_sum)
            .ok_or_else(|| OrderError::Validation("order amount is too large".into()))?;
        if computed != params.amount {
            return Err(OrderError::AmountMismatch {
                declared: params.amount,
                computed,
            });
        }
        Ok(Self {
            id,
            restaurant: params.restaurant,
            table: params.table,
            items: params.items,
            amount: params.amount,
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            customer: params.customer,
            customer_name: params.customer_name,
            created_at: now,
            updated_at: now,
            history: Vec::new(),
        })
    }

    pub fn items_total(&self) -> Money {
        self.items.iter().map(OrderLine::line_total).sum()
    }

    /// Moves `updated_at` forward, strictly, even if the clock has not.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }

    /// Applies a status change if the policy allows it. Nothing changes on error.
    pub fn transition(
        &mut self,
        to: OrderStatus,
        policy: TransitionPolicy,
        now: DateTime<Utc>,
    ) -> Result<StatusChange, OrderError> {
        let from = self.status;
        if !policy.permits(from, to) {
            return Err(OrderError::IllegalTransition { from, to });
        }
        self.status = to;
        self.touch(now);
        let change = StatusChange {
            from,
            to,
            at: self.updated_at,
        };
        self.history.push(change);
        Ok(change)
    }

    pub fn apply_update(&mut self, update: OrderUpdate, now: DateTime<Utc>) {
        if let Some(payment_status) = update.payment_status {
            self.payment_status = payment_status;
        }
        if let Some(name) = update.customer_name {
            self.customer_name = Some(name);
        }
        self.touch(now);
    }
}
