//! Store seed - caller-provided initial state
//!
//! The library never invents data. A host assembles a `StoreSeed`
//! (directly or from JSON) and hands it to `DeskStore::new`.

use serde::{Deserialize, Serialize};

use desk_core::{Conversation, Customer, Notification, Order, Product, TeamMember, User};

/// Initial dataset a store is constructed from.
///
/// The current user is required since mutators resolve the acting
/// operator from it. Every collection defaults to empty, so a host can
/// seed only what a session needs.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StoreSeed {
    pub current_user: User,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub conversations: Vec<Conversation>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl StoreSeed {
    /// Seed holding only the current user.
    pub fn new(current_user: User) -> Self {
        Self {
            current_user,
            team: Vec::new(),
            conversations: Vec::new(),
            orders: Vec::new(),
            products: Vec::new(),
            customers: Vec::new(),
            notifications: Vec::new(),
        }
    }

    pub fn with_team(mut self, team: Vec<TeamMember>) -> Self {
        self.team = team;
        self
    }

    pub fn with_conversations(mut self, conversations: Vec<Conversation>) -> Self {
        self.conversations = conversations;
        self
    }

    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_customers(mut self, customers: Vec<Customer>) -> Self {
        self.customers = customers;
        self
    }

    pub fn with_notifications(mut self, notifications: Vec<Notification>) -> Self {
        self.notifications = notifications;
        self
    }
}
