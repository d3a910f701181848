//! desk_core - Core entity types for the support desk
//!
//! This crate provides the foundational types shared by the desk crates:
//! - `user` - operator accounts and the team roster
//! - `conversation` - conversation threads with AI/human handoff state
//! - `message` - transcript entries and sender kinds
//! - `order` - orders, line items, and payment state
//! - `product` - catalog entries
//! - `customer` - the customer directory
//! - `notification` - console notifications

pub mod conversation;
pub mod customer;
pub mod message;
pub mod notification;
pub mod order;
pub mod product;
pub mod user;

// Re-export commonly used types
pub use conversation::{Conversation, ConversationMode, ConversationStatus, Priority};
pub use customer::Customer;
pub use message::{Message, MessageSender};
pub use notification::{Notification, NotificationKind};
pub use order::{Order, OrderItem, OrderStatus, PaymentStatus};
pub use product::{Product, ProductKind};
pub use user::{Presence, TeamMember, User, UserRole};
