/*
[INPUT]:  Failure sources (transport, status responses, local request build)
[OUTPUT]: Structured error shapes with status/body inspection helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new failure shapes or inspection helpers
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the taskdeck adapter.
///
/// Every failed call produces exactly one of three shapes: the request was
/// dispatched but no usable response came back (`Transport`), the server
/// answered with a non-success status (`Status`), or the request never left
/// the client (`Request`). `InvalidResponse` covers 2xx bodies that fail to
/// decode into the expected type.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Request dispatched, no response received
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned status {status}")]
    Status {
        status: StatusCode,
        body: Option<serde_json::Value>,
    },

    /// Failure raised locally before the request was dispatched
    #[error("request could not be built: {0}")]
    Request(String),

    /// Response arrived with a success status but an undecodable body
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl GatewayError {
    /// Status code of the response, when the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check whether the server rejected the call as unauthenticated
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Detail text from the service's `{"detail": ...}` error body, if any
    pub fn detail_message(&self) -> Option<String> {
        match self {
            GatewayError::Status { body: Some(body), .. } => body
                .get("detail")
                .and_then(|value| value.as_str())
                .map(|detail| detail.to_string()),
            _ => None,
        }
    }

    /// Classify a reqwest failure into the transport/local split
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_builder() {
            GatewayError::Request(err.to_string())
        } else {
            GatewayError::Transport(err)
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, GatewayError>;
