//! Desk store - owns all domain state for a session

use uuid::Uuid;

use desk_core::{Conversation, Customer, Notification, Order, Product, TeamMember, User};

use crate::seed::StoreSeed;

/// In-memory domain store.
///
/// Owns every entity for the lifetime of a session. Reads borrow;
/// mutations take `&mut self` and go through the explicit mutators, so
/// each one is atomic with respect to the single store value. There is
/// no internal synchronization; a host embedding the store in a
/// concurrent shell wraps it in its own lock.
pub struct DeskStore {
    pub(crate) current_user: User,
    pub(crate) team: Vec<TeamMember>,
    pub(crate) conversations: Vec<Conversation>,
    pub(crate) orders: Vec<Order>,
    pub(crate) products: Vec<Product>,
    pub(crate) customers: Vec<Customer>,
    pub(crate) notifications: Vec<Notification>,
}

impl DeskStore {
    /// Create a store from a seed.
    pub fn new(seed: StoreSeed) -> Self {
        tracing::info!(
            user = %seed.current_user.name,
            team = seed.team.len(),
            conversations = seed.conversations.len(),
            orders = seed.orders.len(),
            products = seed.products.len(),
            customers = seed.customers.len(),
            notifications = seed.notifications.len(),
            "DeskStore: Seeding store"
        );

        Self {
            current_user: seed.current_user,
            team: seed.team,
            conversations: seed.conversations,
            orders: seed.orders,
            products: seed.products,
            customers: seed.customers,
            notifications: seed.notifications,
        }
    }

    /// The operator using this session.
    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn conversation(&self, id: Uuid) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn order(&self, id: Uuid) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn product(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn customer(&self, id: Uuid) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub(crate) fn conversation_mut(&mut self, id: Uuid) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }

    pub(crate) fn order_mut(&mut self, id: Uuid) -> Option<&mut Order> {
        self.orders.iter_mut().find(|o| o.id == id)
    }

    pub(crate) fn notification_mut(&mut self, id: Uuid) -> Option<&mut Notification> {
        self.notifications.iter_mut().find(|n| n.id == id)
    }
}
