//! Pure conversation-state transitions, kept out of the view model so they
//! can be tested without a reactive runtime.

use crate::api::types::{Conversation, Message};

/// Appends a message to its conversation and bumps `last_activity`. No-op if
/// the conversation id is unknown.
pub fn append_message(conversations: &mut [Conversation], conversation_id: &str, message: Message) {
    if let Some(conversation) = conversations
        .iter_mut()
        .find(|conversation| conversation.id == conversation_id)
    {
        if message.timestamp > conversation.last_activity {
            conversation.last_activity = message.timestamp;
        }
        conversation.messages.push(message);
    }
}

/// Marks every message in a conversation read and zeroes its unread counter.
pub fn mark_read(conversations: &mut [Conversation], conversation_id: &str) {
    if let Some(conversation) = conversations
        .iter_mut()
        .find(|conversation| conversation.id == conversation_id)
    {
        for message in &mut conversation.messages {
            message.is_read = true;
        }
        conversation.unread_count = 0;
    }
}

pub fn total_unread(conversations: &[Conversation]) -> u32 {
    conversations
        .iter()
        .map(|conversation| conversation.unread_count)
        .sum()
}

/// Most recently active first.
pub fn sort_by_activity(conversations: &mut [Conversation]) {
    conversations.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
}
