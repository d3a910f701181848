//! Conversation mutators - status writes, handoff, transcript appends

use uuid::Uuid;

use desk_core::{ConversationMode, ConversationStatus, Message, MessageSender};
use desk_state::{plan_handoff, HandoffEvent, HandoffTransition};

use crate::error::{Result, StoreError};
use crate::store::DeskStore;

impl DeskStore {
    /// Overwrite a conversation's status.
    ///
    /// Any status may follow any other; closing is not terminal and
    /// reopening needs no ceremony. No other field is touched.
    pub fn update_conversation_status(
        &mut self,
        id: Uuid,
        status: ConversationStatus,
    ) -> Result<()> {
        let conversation = self
            .conversation_mut(id)
            .ok_or(StoreError::ConversationNotFound(id))?;

        let previous = conversation.status;
        conversation.status = status;

        tracing::info!(
            conversation_id = %id,
            from = previous.as_str(),
            to = status.as_str(),
            "DeskStore: Conversation status updated"
        );

        Ok(())
    }

    /// Switch who is driving a conversation.
    ///
    /// Applies the planned handoff: sets the mode, moves the assignment
    /// (`agent_id` when given, otherwise the previous assignee stays),
    /// and appends exactly one system note recording the transition.
    /// The note names the store's current user as the acting operator.
    /// The last-message preview is untouched; handoff notes are
    /// bookkeeping, not customer traffic.
    pub fn update_conversation_mode(
        &mut self,
        id: Uuid,
        mode: ConversationMode,
        agent_id: Option<Uuid>,
    ) -> Result<HandoffTransition> {
        // The roster is not authoritative, so an unknown agent id is
        // accepted; it just gets flagged.
        if let Some(agent) = agent_id {
            if self.team_member(agent).is_none() {
                tracing::warn!(
                    conversation_id = %id,
                    agent_id = %agent,
                    "DeskStore: Assigned agent is not in the team roster"
                );
            }
        }

        let event = match mode {
            ConversationMode::Human => HandoffEvent::TakeOver {
                agent_id,
                operator_name: self.current_user.name.clone(),
            },
            ConversationMode::Ai => HandoffEvent::ReturnToAi { agent_id },
        };

        let conversation = self
            .conversation_mut(id)
            .ok_or(StoreError::ConversationNotFound(id))?;

        let transition = plan_handoff(conversation.mode, conversation.assigned_agent, &event);
        conversation.mode = transition.to;
        conversation.assigned_agent = transition.assigned_agent;
        conversation.push_system_note(transition.system_note.clone());

        tracing::info!(
            conversation_id = %id,
            from = transition.from.as_str(),
            to = transition.to.as_str(),
            changed = transition.changed,
            assigned_agent = ?transition.assigned_agent,
            "DeskStore: Conversation handoff applied"
        );

        Ok(transition)
    }

    /// Append a message to a conversation's transcript and mirror it
    /// into the last-message preview.
    ///
    /// Empty or whitespace-only content is rejected and the
    /// conversation is left untouched. The display name is resolved
    /// here: human messages carry the current user's name, customer
    /// messages the conversation's customer name.
    pub fn add_message(
        &mut self,
        conversation_id: Uuid,
        content: impl Into<String>,
        sender: MessageSender,
    ) -> Result<Uuid> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(StoreError::EmptyMessageContent);
        }

        let operator_name = self.current_user.name.clone();
        let conversation = self
            .conversation_mut(conversation_id)
            .ok_or(StoreError::ConversationNotFound(conversation_id))?;

        let sender_name = match sender {
            MessageSender::Human => operator_name,
            MessageSender::Customer => conversation.customer_name.clone(),
            MessageSender::Ai => "AI Assistant".to_string(),
            MessageSender::System => "System".to_string(),
        };

        let message = Message::new(sender, sender_name, content);
        let message_id = message.id;
        conversation.record_message(message);

        tracing::debug!(
            conversation_id = %conversation_id,
            message_id = %message_id,
            sender = sender.as_str(),
            "DeskStore: Message appended"
        );

        Ok(message_id)
    }
}
