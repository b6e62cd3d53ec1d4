use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion endpoint returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("completion endpoint returned no choices")]
    EmptyResponse,
}
