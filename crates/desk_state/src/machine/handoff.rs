//! Conversation handoff - who is driving a conversation
//!
//! A conversation is answered either by the AI assistant or by a human
//! operator. Handoff events flip the driver and always leave a system
//! note in the transcript, even when the mode does not change (a second
//! takeover by a different operator is a real event worth recording).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use desk_core::ConversationMode;

/// Events that move a conversation between drivers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandoffEvent {
    /// A human operator takes the conversation over from the AI.
    TakeOver {
        /// Team member to assign. `None` keeps the current assignee.
        agent_id: Option<Uuid>,
        /// Operator display name, used in the transcript note.
        operator_name: String,
    },

    /// The conversation is handed back to the AI assistant.
    ReturnToAi {
        /// Optional reassignment recorded alongside the return.
        agent_id: Option<Uuid>,
    },
}

impl HandoffEvent {
    /// The mode this event drives the conversation into.
    pub fn target_mode(&self) -> ConversationMode {
        match self {
            Self::TakeOver { .. } => ConversationMode::Human,
            Self::ReturnToAi { .. } => ConversationMode::Ai,
        }
    }
}

/// Result of planning a handoff against a conversation's current state.
#[derive(Debug, Clone)]
pub struct HandoffTransition {
    /// The mode before the handoff.
    pub from: ConversationMode,
    /// The mode after the handoff.
    pub to: ConversationMode,
    /// Whether the mode actually changed.
    pub changed: bool,
    /// Assignee after the handoff.
    pub assigned_agent: Option<Uuid>,
    /// Note to append to the transcript as a system message.
    pub system_note: String,
}

/// Plan a handoff. Handoffs never fail: any event is accepted in any
/// mode, and the assignee falls back to the current one when the event
/// carries no agent.
pub fn plan_handoff(
    current_mode: ConversationMode,
    current_agent: Option<Uuid>,
    event: &HandoffEvent,
) -> HandoffTransition {
    let to = event.target_mode();

    let (assigned_agent, system_note) = match event {
        HandoffEvent::TakeOver {
            agent_id,
            operator_name,
        } => (
            agent_id.or(current_agent),
            format!("Conversation taken over by {}", operator_name),
        ),
        HandoffEvent::ReturnToAi { agent_id } => (
            agent_id.or(current_agent),
            "Conversation returned to AI".to_string(),
        ),
    };

    HandoffTransition {
        from: current_mode,
        to,
        changed: current_mode != to,
        assigned_agent,
        system_note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_over_switches_to_human() {
        let agent = Uuid::new_v4();
        let event = HandoffEvent::TakeOver {
            agent_id: Some(agent),
            operator_name: "Sarah Kim".to_string(),
        };

        let transition = plan_handoff(ConversationMode::Ai, None, &event);
        assert_eq!(transition.from, ConversationMode::Ai);
        assert_eq!(transition.to, ConversationMode::Human);
        assert!(transition.changed);
        assert_eq!(transition.assigned_agent, Some(agent));
        assert_eq!(transition.system_note, "Conversation taken over by Sarah Kim");
    }

    #[test]
    fn test_take_over_without_agent_keeps_assignee() {
        let previous = Uuid::new_v4();
        let event = HandoffEvent::TakeOver {
            agent_id: None,
            operator_name: "Sarah Kim".to_string(),
        };

        let transition = plan_handoff(ConversationMode::Ai, Some(previous), &event);
        assert_eq!(transition.assigned_agent, Some(previous));
    }

    #[test]
    fn test_return_to_ai_note() {
        let event = HandoffEvent::ReturnToAi { agent_id: None };

        let transition = plan_handoff(ConversationMode::Human, None, &event);
        assert_eq!(transition.to, ConversationMode::Ai);
        assert!(transition.changed);
        assert_eq!(transition.system_note, "Conversation returned to AI");
    }

    #[test]
    fn test_same_mode_handoff_is_not_a_change() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let event = HandoffEvent::TakeOver {
            agent_id: Some(second),
            operator_name: "Omar Haddad".to_string(),
        };

        // Second takeover: mode stays human, assignee moves.
        let transition = plan_handoff(ConversationMode::Human, Some(first), &event);
        assert!(!transition.changed);
        assert_eq!(transition.to, ConversationMode::Human);
        assert_eq!(transition.assigned_agent, Some(second));
    }
}
