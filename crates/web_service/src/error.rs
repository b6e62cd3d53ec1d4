use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use recommender::RecommenderError;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// User-visible errors. Deliberately coarse: parse diagnostics and upstream
/// detail stay in the log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to process model response")]
    ProcessingFailed,

    #[error("Completion endpoint unavailable")]
    UpstreamUnavailable,
}

impl From<RecommenderError> for AppError {
    fn from(err: RecommenderError) -> Self {
        match err {
            RecommenderError::Completion(_) => AppError::UpstreamUnavailable,
            _ => AppError::ProcessingFailed,
        }
    }
}

#[derive(Serialize)]
struct JsonError {
    message: String,
    r#type: String,
}

#[derive(Serialize)]
struct JsonErrorWrapper {
    error: JsonError,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ProcessingFailed => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_response = JsonErrorWrapper {
            error: JsonError {
                message: self.to_string(),
                r#type: "api_error".to_string(),
            },
        };
        HttpResponse::build(status_code).json(error_response)
    }
}
