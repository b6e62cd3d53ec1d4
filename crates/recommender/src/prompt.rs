//! Prompt assembly: static instruction template + catalog + trimmed history.

use chat_core::ChatTurn;
use llm_client::api::models::ChatMessage;

pub const MENU_PLACEHOLDER: &str = "{{MENU}}";

/// Build the ordered message sequence for the completion request: a system
/// message with the catalog substituted into the template, then one message
/// per turn with whitespace-stripped content, in original order.
pub fn build_messages(template: &str, menu_json: &str, history: &[ChatTurn]) -> Vec<ChatMessage> {
    let system_prompt = template.replace(MENU_PLACEHOLDER, menu_json);

    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(system_prompt));
    for turn in history {
        messages.push(ChatMessage::new(turn.role.into(), turn.content.trim()));
    }
    messages
}
