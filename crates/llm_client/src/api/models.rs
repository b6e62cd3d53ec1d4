//! Wire models for the OpenAI-compatible chat completion API.

use serde::{Deserialize, Serialize};

/// Message role on the wire. Wider than `chat_core::Role` because the
/// assembled prompt starts with a system message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl From<chat_core::Role> for MessageRole {
    fn from(role: chat_core::Role) -> Self {
        match role {
            chat_core::Role::User => MessageRole::User,
            chat_core::Role::Assistant => MessageRole::Assistant,
        }
    }
}

/// One role-tagged message of the outbound prompt.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage>,
}

/// Response shapes are kept lenient; providers differ on which metadata
/// fields they populate.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Choice {
    pub index: u32,
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(
            serde_json::to_string(&MessageRole::System).unwrap(),
            "\"system\""
        );
        assert_eq!(
            MessageRole::from(chat_core::Role::Assistant),
            MessageRole::Assistant
        );
    }

    #[test]
    fn test_response_parses_without_optional_fields() {
        let json = r#"{
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello!"}
            }]
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices[0].message.content.as_deref(), Some("Hello!"));
        assert!(response.usage.is_none());
    }

    #[test]
    fn test_request_serializes_messages_in_order() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 300,
            messages: vec![
                ChatMessage::system("You are Smoothie-Bot."),
                ChatMessage::new(MessageRole::User, "hi"),
            ],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["max_tokens"], 300);
    }
}
