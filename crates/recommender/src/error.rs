use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecommenderError {
    #[error("menu catalog error: {0}")]
    Menu(#[from] chat_core::MenuError),

    #[error("llm config error: {0}")]
    LlmConfig(#[from] llm_client::config::LlmConfigError),

    #[error("failed to read system prompt template '{path}': {source}")]
    Template {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog serialization error: {0}")]
    CatalogJson(#[from] serde_json::Error),

    #[error("completion request failed: {0}")]
    Completion(#[from] llm_client::ClientError),

    /// Deliberately opaque. Parse diagnostics go to the log, never to the
    /// caller.
    #[error("Failed to process model response")]
    Processing,
}
