//! desk_state - State machines for conversation handoff and order fulfillment
//!
//! This crate provides the transition logic for the two lifecycles the
//! desk tracks: who is driving a conversation (AI or a human operator)
//! and how an order moves through fulfillment. The functions here are
//! pure; applying a transition to stored entities is the store's job.

pub mod machine;

// Re-export commonly used types
pub use machine::{
    plan_handoff, HandoffEvent, HandoffTransition, OrderPipeline, PipelineTransition,
    TransitionError,
};
