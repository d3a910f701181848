//! Store error types

use desk_state::TransitionError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Conversation not found: {0}")]
    ConversationNotFound(Uuid),

    #[error("Order not found: {0}")]
    OrderNotFound(Uuid),

    #[error("Customer not found: {0}")]
    CustomerNotFound(Uuid),

    #[error("Notification not found: {0}")]
    NotificationNotFound(Uuid),

    #[error("Message content is empty")]
    EmptyMessageContent,

    #[error("Order has no items")]
    EmptyCart,

    #[error("Invalid quantity for item: {item}")]
    InvalidQuantity { item: String },

    #[error("Customer name and phone are required")]
    CustomerDetailsRequired,

    #[error("Order total {actual} does not match item sum {expected}")]
    TotalMismatch { expected: u64, actual: u64 },

    #[error("Order already exists: {0}")]
    DuplicateOrder(Uuid),

    #[error("Transition error: {0}")]
    Transition(#[from] TransitionError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
