//! Request/response bodies for the chat endpoint.

use serde::Deserialize;

use chat_core::ChatTurn;

/// Inbound chat request: the full conversation so far, oldest turn first.
#[derive(Deserialize, Debug, Clone)]
pub struct ChatRequest {
    pub history: Vec<ChatTurn>,
}

// The response body is a `chat_core::Recommendation` serialized as-is.
