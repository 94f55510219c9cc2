//! Custom actions for the Loyalty actor.

use crate::model::{Money, OrderId, PurchaseReward};

#[derive(Debug, Clone)]
pub enum LoyaltyAction {
    /// Credits cashback and tier bonuses for a completed order.
    RecordPurchase { order_id: OrderId, amount: Money },
    /// Debits the balance.
    Redeem(Money),
    /// Reads the balance.
    Balance,
}

/// Results from LoyaltyActions - variants match 1:1 with LoyaltyAction
#[derive(Debug, Clone)]
pub enum LoyaltyActionResult {
    RecordPurchase(PurchaseReward),
    /// Balance left after the debit.
    Redeem(Money),
    Balance(Money),
}
