pub mod api;
pub mod client_trait;
pub mod config;
pub mod error;

pub use api::client::OpenAiClient;
pub use client_trait::CompletionClient;
pub use config::LlmConfig;
pub use error::ClientError;
