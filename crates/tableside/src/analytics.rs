//! Dashboard figures computed from a restaurant's orders.

use crate::model::{MenuItemId, Money, Order, OrderStatus};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSales {
    pub id: MenuItemId,
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_orders: usize,
    pub by_status: BTreeMap<OrderStatus, usize>,
    /// Orders not yet completed or cancelled.
    pub open_orders: usize,
    /// Sum of completed order amounts.
    pub revenue: Money,
    /// Revenue over completed orders, rounded down. Zero when none completed.
    pub average_ticket: Money,
    /// Best sellers by quantity across orders that were not cancelled.
    pub top_items: Vec<ItemSales>,
}

impl DashboardSummary {
    pub const TOP_ITEMS: usize = 5;

    pub fn from_orders(orders: &[Order]) -> Self {
        let mut by_status: BTreeMap<OrderStatus, usize> =
            OrderStatus::ALL.into_iter().map(|s| (s, 0)).collect();
        let mut revenue = Money::ZERO;
        let mut completed = 0u64;
        let mut sales: HashMap<&MenuItemId, ItemSales> = HashMap::new();

        for order in orders {
            *by_status.entry(order.status).or_default() += 1;
            if order.status == OrderStatus::Completed {
                revenue += order.amount;
                completed += 1;
            }
            if order.status == OrderStatus::Cancelled {
                continue;
            }
            for line in &order.items {
                let entry = sales.entry(&line.id).or_insert_with(|| ItemSales {
                    id: line.id.clone(),
                    name: line.name.clone(),
                    quantity: 0,
                });
                entry.quantity = entry.quantity.saturating_add(line.quantity);
            }
        }

        let mut top_items: Vec<ItemSales> = sales.into_values().collect();
        top_items.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.id.0.cmp(&b.id.0)));
        top_items.truncate(Self::TOP_ITEMS);

        Self {
            total_orders: orders.len(),
            open_orders: orders.iter().filter(|o| !o.status.is_terminal()).count(),
            by_status,
            revenue,
            average_ticket: Money(revenue.cents().checked_div(completed).unwrap_or(0)),
            top_items,
        }
    }
}
