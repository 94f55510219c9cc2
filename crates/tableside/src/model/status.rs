//! Order lifecycle vocabulary.
//!
//! One canonical status enum. The older spellings still parse: `in-progress`
//! is [`OrderStatus::Preparing`] and `delivered` is [`OrderStatus::Completed`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    #[serde(alias = "in-progress", alias = "in_progress")]
    Preparing,
    Ready,
    #[serde(alias = "delivered")]
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// The transition table.
    pub fn allowed_next(self) -> &'static [OrderStatus] {
        use OrderStatus::{Cancelled, Completed, Pending, Preparing, Ready};
        match self {
            Pending => &[Preparing, Completed, Cancelled],
            Preparing => &[Ready, Completed, Cancelled],
            Ready => &[Completed, Cancelled],
            Completed | Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.allowed_next().contains(&next)
    }

    /// What the customer tracker shows for this status.
    pub fn display(self) -> StatusDisplay {
        let (icon, label, eta) = match self {
            OrderStatus::Pending => ("clock", "Order received", EtaBucket::Minutes { min: 15, max: 20 }),
            OrderStatus::Preparing => ("chef-hat", "Being prepared", EtaBucket::Minutes { min: 10, max: 15 }),
            OrderStatus::Ready => ("bell", "Ready to serve", EtaBucket::Now),
            OrderStatus::Completed => ("check-circle", "Served", EtaBucket::Done),
            OrderStatus::Cancelled => ("x-circle", "Cancelled", EtaBucket::Done),
        };
        StatusDisplay { icon, label, eta }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" | "in-progress" | "in_progress" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "completed" | "delivered" => Ok(OrderStatus::Completed),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
    Failed,
}

/// Whether transition requests are checked against the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    /// Only transitions listed by [`OrderStatus::allowed_next`] are accepted.
    #[default]
    Enforced,
    /// Any target is accepted, including moves out of a terminal state.
    Unchecked,
}

impl TransitionPolicy {
    pub fn permits(self, from: OrderStatus, to: OrderStatus) -> bool {
        match self {
            TransitionPolicy::Enforced => from.can_transition_to(to),
            TransitionPolicy::Unchecked => true,
        }
    }
}

/// Rough time-to-table shown next to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EtaBucket {
    Minutes { min: u32, max: u32 },
    Now,
    Done,
}

impl Display for EtaBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtaBucket::Minutes { min, max } => write!(f, "{min}-{max} min"),
            EtaBucket::Now => f.write_str("now"),
            EtaBucket::Done => f.write_str("done"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub icon: &'static str,
    pub label: &'static str,
    pub eta: EtaBucket,
}
