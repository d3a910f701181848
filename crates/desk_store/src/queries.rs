//! Derived queries - dashboard figures, list filters, roster lookups
//!
//! Pure folds over the store. Nothing here mutates; the UI recomputes
//! these on every render, so they stay cheap and allocation-light.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use desk_core::{
    Conversation, ConversationMode, ConversationStatus, Order, OrderStatus, PaymentStatus,
    TeamMember,
};

use crate::store::DeskStore;

/// Stock level at or below which an active product counts as low.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Headline figures for the dashboard.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DashboardSnapshot {
    /// Orders created on the same UTC calendar day as the query time.
    pub orders_today: usize,
    /// Conversations currently open.
    pub open_conversations: usize,
    /// Summed totals of paid orders, in cents.
    pub revenue: u64,
    /// Active products at or below the low-stock threshold.
    pub low_stock_products: usize,
}

/// Narrowing for the conversation list.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ConversationFilter {
    /// Substring matched case-insensitively against the customer name,
    /// phone, and last-message preview. Empty matches everything.
    #[serde(default)]
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ConversationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ConversationMode>,
}

impl ConversationFilter {
    pub fn matches(&self, conversation: &Conversation) -> bool {
        let query = self.query.to_lowercase();
        let match_query = query.is_empty()
            || conversation.customer_name.to_lowercase().contains(&query)
            || conversation.customer_phone.to_lowercase().contains(&query)
            || conversation.last_message.to_lowercase().contains(&query);

        let match_status = self.status.map_or(true, |s| conversation.status == s);
        let match_mode = self.mode.map_or(true, |m| conversation.mode == m);

        match_query && match_status && match_mode
    }
}

/// Narrowing for the order list.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct OrderFilter {
    /// Substring matched case-insensitively against the hyphenated
    /// order id and the customer name. Empty matches everything.
    #[serde(default)]
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        let query = self.query.to_lowercase();
        let match_query = query.is_empty()
            || order.id.to_string().contains(&query)
            || order.customer_name.to_lowercase().contains(&query);

        let match_status = self.status.map_or(true, |s| order.status == s);

        match_query && match_status
    }
}

impl DeskStore {
    /// Compute the dashboard figures as of `now`.
    pub fn dashboard(&self, now: DateTime<Utc>) -> DashboardSnapshot {
        let today = now.date_naive();

        DashboardSnapshot {
            orders_today: self
                .orders
                .iter()
                .filter(|o| o.created_at.date_naive() == today)
                .count(),
            open_conversations: self
                .conversations
                .iter()
                .filter(|c| c.status == ConversationStatus::Open)
                .count(),
            revenue: self
                .orders
                .iter()
                .filter(|o| o.payment_status == PaymentStatus::Paid)
                .map(|o| o.total)
                .sum(),
            low_stock_products: self
                .products
                .iter()
                .filter(|p| p.is_low_stock(LOW_STOCK_THRESHOLD))
                .count(),
        }
    }

    /// Notifications not yet marked read.
    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Conversations matching a filter, in seed order.
    pub fn filter_conversations(&self, filter: &ConversationFilter) -> Vec<&Conversation> {
        self.conversations.iter().filter(|c| filter.matches(c)).collect()
    }

    /// Orders matching a filter, in seed order.
    pub fn filter_orders(&self, filter: &OrderFilter) -> Vec<&Order> {
        self.orders.iter().filter(|o| filter.matches(o)).collect()
    }

    /// How many orders sit at each status. Statuses with no orders are
    /// absent from the map.
    pub fn order_status_counts(&self) -> HashMap<OrderStatus, usize> {
        let mut counts = HashMap::new();
        for order in &self.orders {
            *counts.entry(order.status).or_insert(0) += 1;
        }
        counts
    }

    /// Roster lookup by account id.
    pub fn team_member(&self, id: Uuid) -> Option<&TeamMember> {
        self.team.iter().find(|m| m.id() == id)
    }

    /// Display name of the agent a conversation is assigned to, if the
    /// assignee is on the roster.
    pub fn assigned_agent_name(&self, conversation: &Conversation) -> Option<&str> {
        conversation
            .assigned_agent
            .and_then(|id| self.team_member(id))
            .map(|member| member.user.name.as_str())
    }
}
