//! # Desk Store
//!
//! Synchronous in-memory store for the support desk domain: seeded at
//! construction, read through borrowing accessors, mutated through
//! explicit `Result`-typed operations that enforce the transition rules
//! from `desk_state`.

pub mod conversations;
pub mod error;
pub mod notifications;
pub mod orders;
pub mod queries;
pub mod seed;
pub mod store;

// Re-exports
pub use error::{Result, StoreError};
pub use orders::{CustomerRef, OrderDraft};
pub use queries::{
    ConversationFilter, DashboardSnapshot, OrderFilter, LOW_STOCK_THRESHOLD,
};
pub use seed::StoreSeed;
pub use store::DeskStore;

// Re-export transition records from desk_state for convenience
pub use desk_state::{HandoffTransition, PipelineTransition, TransitionError};
