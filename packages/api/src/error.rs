//! Uniform failure type for every backend call.
//!
//! The backend reports rejected requests with a non-2xx status and a JSON body
//! of the form `{ "error": "..." }`. Those become [`ApiError::Request`] carrying
//! the server's message verbatim. Everything else (connection failures, bodies
//! without an `error` field, undecodable success payloads) becomes
//! [`ApiError::Unexpected`], whose `Display` is a generic message suitable for a
//! toast while the inner detail is kept for logs.

use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the request and said why.
    #[error("{0}")]
    Request(String),
    /// Failure without a structured body.
    #[error("Something went wrong, please try again")]
    Unexpected(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Build the error for a non-2xx response.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { error }) => ApiError::Request(error),
            Err(_) => {
                let snippet: String = body.chars().take(200).collect();
                ApiError::Unexpected(format!("HTTP {status}: {snippet}"))
            }
        }
    }

    /// Text to show the user.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Underlying detail, for logging.
    pub fn detail(&self) -> &str {
        match self {
            ApiError::Request(msg) | ApiError::Unexpected(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Unexpected(e.to_string())
    }
}
