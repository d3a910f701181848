//! Order pipeline - forward-only fulfillment transitions
//!
//! Orders advance one step at a time along a fixed route, with
//! cancellation as the only side exit. Completed and canceled orders
//! never move again.

use thiserror::Error;

use desk_core::OrderStatus;

/// Error type for invalid pipeline transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Invalid transition from {from:?} to {to:?}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Order is in terminal status: {0:?}")]
    TerminalStatus(OrderStatus),
}

/// Represents a pipeline transition result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineTransition {
    /// The status before the transition.
    pub from: OrderStatus,
    /// The status after the transition.
    pub to: OrderStatus,
}

/// Transition rules for the order fulfillment pipeline.
///
/// Stateless; the current status lives on the order itself.
pub struct OrderPipeline;

impl OrderPipeline {
    /// The forward route, in order. Cancellation is not part of the
    /// route; it is a side exit from every non-terminal status.
    pub const FORWARD_ORDER: [OrderStatus; 6] = [
        OrderStatus::New,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivering,
        OrderStatus::Completed,
    ];

    /// The next status along the forward route, or `None` for terminal
    /// statuses.
    pub fn next_status(status: OrderStatus) -> Option<OrderStatus> {
        use OrderStatus::*;

        match status {
            New => Some(Confirmed),
            Confirmed => Some(Preparing),
            Preparing => Some(Ready),
            Ready => Some(Delivering),
            Delivering => Some(Completed),
            Completed | Canceled => None,
        }
    }

    /// Label for the action that advances an order one step, or `None`
    /// when no further action exists.
    pub fn next_action_label(status: OrderStatus) -> Option<&'static str> {
        use OrderStatus::*;

        match status {
            New => Some("Confirm Order"),
            Confirmed => Some("Start Preparing"),
            Preparing => Some("Mark Ready"),
            Ready => Some("Dispatch"),
            Delivering => Some("Complete"),
            Completed | Canceled => None,
        }
    }

    /// Advance one step along the forward route.
    pub fn advance(from: OrderStatus) -> Result<PipelineTransition, TransitionError> {
        match Self::next_status(from) {
            Some(to) => Ok(PipelineTransition { from, to }),
            None => Err(TransitionError::TerminalStatus(from)),
        }
    }

    /// Cancel from any non-terminal status.
    pub fn cancel(from: OrderStatus) -> Result<PipelineTransition, TransitionError> {
        if from.is_terminal() {
            return Err(TransitionError::TerminalStatus(from));
        }

        Ok(PipelineTransition {
            from,
            to: OrderStatus::Canceled,
        })
    }

    /// Check that `from -> to` is a legal transition: one forward step
    /// or a cancellation.
    pub fn validate(from: OrderStatus, to: OrderStatus) -> Result<(), TransitionError> {
        if from.is_terminal() {
            return Err(TransitionError::TerminalStatus(from));
        }

        if to == OrderStatus::Canceled || Self::next_status(from) == Some(to) {
            return Ok(());
        }

        Err(TransitionError::InvalidTransition { from, to })
    }
}
