/// A customer's loyalty account.
///
/// # Actor Framework
/// Managed by the loyalty actor; see
/// [`loyalty_actor::entity`](crate::loyalty_actor::entity). The program rules
/// ([`LoyaltyProgram`]) are the actor's context.
use crate::loyalty_actor::LoyaltyError;
use crate::model::{Money, OrderId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for loyalty customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// A bonus paid once, when the customer's order count reaches `orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTier {
    pub name: String,
    pub orders: u32,
    pub bonus: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoyaltyProgram {
    /// Cashback rate in basis points of the order amount.
    pub cashback_bps: u32,
    pub tiers: Vec<RewardTier>,
}

impl Default for LoyaltyProgram {
    fn default() -> Self {
        Self {
            cashback_bps: 500,
            tiers: vec![
                RewardTier {
                    name: "Regular".into(),
                    orders: 5,
                    bonus: Money(500),
                },
                RewardTier {
                    name: "Gold".into(),
                    orders: 10,
                    bonus: Money(1500),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardGrant {
    pub tier: String,
    pub bonus: Money,
    pub order_id: OrderId,
    pub at: DateTime<Utc>,
}

/// What one recorded purchase earned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseReward {
    pub cashback: Money,
    pub bonus: Money,
    pub tiers_reached: Vec<String>,
    pub balance: Money,
}

impl PurchaseReward {
    pub fn credited(&self) -> Money {
        self.cashback + self.bonus
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyAccount {
    pub id: CustomerId,
    pub name: String,
    pub balance: Money,
    pub order_count: u32,
    pub lifetime_spend: Money,
    pub rewards: Vec<RewardGrant>,
    credited_orders: Vec<OrderId>,
}

#[derive(Debug, Clone)]
pub struct LoyaltyCreate {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct LoyaltyUpdate {
    pub name: Option<String>,
}

impl LoyaltyAccount {
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            balance: Money::ZERO,
            order_count: 0,
            lifetime_spend: Money::ZERO,
            rewards: Vec::new(),
            credited_orders: Vec::new(),
        }
    }

    pub fn has_credited(&self, order_id: OrderId) -> bool {
        self.credited_orders.contains(&order_id)
    }

    /// Credits cashback and any tier bonus for a completed order.
    pub fn record_purchase(
        &mut self,
        order_id: OrderId,
        amount: Money,
        program: &LoyaltyProgram,
        now: DateTime<Utc>,
    ) -> Result<PurchaseReward, LoyaltyError> {
        if self.has_credited(order_id) {
            return Err(LoyaltyError::DuplicateOrder(order_id.to_string()));
        }
        self.credited_orders.push(order_id);
        self.order_count += 1;
        self.lifetime_spend += amount;

        let cashback = amount.basis_points_floor(program.cashback_bps);
        let mut bonus = Money::ZERO;
        let mut tiers_reached = Vec::new();
        for tier in program.tiers.iter().filter(|t| t.orders == self.order_count) {
            bonus += tier.bonus;
            tiers_reached.push(tier.name.clone());
            self.rewards.push(RewardGrant {
                tier: tier.name.clone(),
                bonus: tier.bonus,
                order_id,
                at: now,
            });
        }
        self.balance += cashback + bonus;

        Ok(PurchaseReward {
            cashback,
            bonus,
            tiers_reached,
            balance: self.balance,
        })
    }

    /// Debits the balance. Returns what is left.
    pub fn redeem(&mut self, amount: Money) -> Result<Money, LoyaltyError> {
        if amount.is_zero() {
            return Err(LoyaltyError::InvalidAmount(amount));
        }
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(LoyaltyError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            })?;
        Ok(self.balance)
    }
}
