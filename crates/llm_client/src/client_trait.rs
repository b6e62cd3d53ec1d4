use async_trait::async_trait;

use crate::api::models::ChatCompletionRequest;
use crate::error::ClientError;

/// Boundary to the completion endpoint. The service core only ever sees a
/// final reply text or an already-surfaced failure; transport, auth and
/// retry live behind this trait.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a chat completion request and return the first choice's
    /// message content.
    async fn complete(&self, request: ChatCompletionRequest) -> Result<String, ClientError>;
}
