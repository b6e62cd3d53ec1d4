use log::{debug, info};
use reqwest::header::HeaderMap;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};

use async_trait::async_trait;

use crate::api::models::{ChatCompletionRequest, ChatCompletionResponse};
use crate::client_trait::CompletionClient;
use crate::config::LlmConfig;
use crate::error::ClientError;

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug)]
pub struct OpenAiClient {
    client: ClientWithMiddleware,
    api_key: Option<String>,
    api_base: String,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Self {
        let client = Self::build_http_client();
        let retry_client = Self::build_retry_client(client);
        OpenAiClient {
            client: retry_client,
            api_key: config.api_key.clone(),
            api_base: config.api_base().trim_end_matches('/').to_string(),
        }
    }

    fn build_http_client() -> Client {
        Client::builder()
            .default_headers(Self::default_headers())
            .build()
            .expect("http client")
    }

    fn build_retry_client(client: Client) -> ClientWithMiddleware {
        // Exponential backoff: 1s, 2s, 4s with jitter
        let retry_policy = ExponentialBackoff::builder()
            .build_with_max_retries(3);

        ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build()
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("accept", "application/json".parse().unwrap());
        headers.insert("content-type", "application/json".parse().unwrap());
        headers
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: ChatCompletionRequest) -> Result<String, ClientError> {
        let url = format!("{}/chat/completions", self.api_base);
        info!(
            "Sending completion request to {} with {} messages",
            url,
            request.messages.len()
        );

        let mut request_builder = self.client.post(&url);
        if let Some(api_key) = &self.api_key {
            request_builder = request_builder.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = request_builder.json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        debug!(
            "Completion response: id={:?}, choices={}",
            completion.id,
            completion.choices.len()
        );

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ClientError::EmptyResponse)
    }
}
