//! State machine module
//!
//! Contains the handoff rules for conversation drivers and the
//! forward-only pipeline for order fulfillment.

mod handoff;
mod pipeline;

pub use handoff::{plan_handoff, HandoffEvent, HandoffTransition};
pub use pipeline::{OrderPipeline, PipelineTransition, TransitionError};
