//! Order - a customer order moving through the fulfillment pipeline.
//!
//! Monetary amounts are integer minor units (cents), so the order-total
//! invariant `total == sum of item subtotals` is exact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fulfillment status of an order.
///
/// Statuses advance along the fixed forward pipeline
/// `new -> confirmed -> preparing -> ready -> delivering -> completed`,
/// with `canceled` as a side-exit from any non-terminal status. The
/// transition rules themselves live in `desk_state`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    New,
    Confirmed,
    Preparing,
    Ready,
    Delivering,
    Completed,
    Canceled,
}

impl OrderStatus {
    /// Check if this status has no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }

    /// Get the status as a simple string for display and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivering => "delivering",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }
}

/// Settlement state of an order's payment.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }
}

/// A line item: what was ordered, how many, and the unit price in cents.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: u64,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Line subtotal in cents.
    pub fn subtotal(&self) -> u64 {
        u64::from(self.quantity) * self.unit_price
    }
}

/// A customer order.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<OrderItem>,
    /// Total in cents. Must equal [`Order::derived_total`].
    pub total: u64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    /// Free-form method label as entered at checkout.
    #[serde(default)]
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Conversation this order originated from, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Sum of line subtotals in cents.
    pub fn derived_total(&self) -> u64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }
}
