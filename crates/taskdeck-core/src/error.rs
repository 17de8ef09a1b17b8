/*
[INPUT]:  Gateway failure shapes and local validation outcomes
[OUTPUT]: Tagged error kinds shared by the auth and task flows
[POS]:    Error handling layer - client-side error taxonomy
[UPDATE]: When adding new failure branches or classification rules
*/

use taskdeck_adapter::{GatewayError, StatusCode};
use thiserror::Error;

/// Local validation failures; these never reach the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required fields are empty")]
    MissingFields,

    #[error("email address is malformed")]
    InvalidEmail,

    #[error("password is below the minimum length")]
    PasswordTooShort,

    #[error("password confirmation does not match")]
    PasswordMismatch,

    #[error("task title is empty")]
    EmptyTitle,
}

/// Tagged failure taxonomy for every auth and task operation.
///
/// Kinds are classified at the call site that issued the request and mapped
/// to user-facing text separately (see `messages`); nothing is rethrown
/// upward and nothing retries automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally before any network call
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Server rejected the credentials or the session token (status 401)
    #[error("unauthorized")]
    Unauthorized,

    /// Duplicate account (status 400; register flow only)
    #[error("account conflict")]
    Conflict { detail: Option<String> },

    /// Server could not process the input (status 422)
    #[error("unprocessable input")]
    UnprocessableInput,

    /// Any other non-success status
    #[error("server fault")]
    ServerFault,

    /// Request dispatched, no response received
    #[error("transport failure")]
    TransportFailure,

    /// Transport succeeded but the response body was unusable
    #[error("invalid server response")]
    InvalidServerResponse,

    /// Neither a response nor a dispatched request to blame
    #[error("unknown failure")]
    Unknown,
}

impl ErrorKind {
    /// Shared classification from a gateway failure.
    ///
    /// The register flow intercepts 400 as `Conflict` before delegating
    /// here; everywhere else a 400 is just another server fault.
    pub fn classify(err: &GatewayError) -> Self {
        match err {
            GatewayError::Status { status, .. } => match *status {
                StatusCode::UNAUTHORIZED => ErrorKind::Unauthorized,
                StatusCode::UNPROCESSABLE_ENTITY => ErrorKind::UnprocessableInput,
                _ => ErrorKind::ServerFault,
            },
            GatewayError::Transport(_) => ErrorKind::TransportFailure,
            GatewayError::InvalidResponse(_) => ErrorKind::InvalidServerResponse,
            GatewayError::Request(_) | GatewayError::UrlParse(_) => ErrorKind::Unknown,
        }
    }
}

/// Task operations, used to tag the store's per-operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOp {
    Load,
    Create,
    Toggle,
    Delete,
    SaveEdit,
}

/// Failure of one TaskStore operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("task operation {op:?} failed: {kind}")]
pub struct StoreError {
    pub op: TaskOp,
    pub kind: ErrorKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: StatusCode) -> GatewayError {
        GatewayError::Status { status, body: None }
    }

    #[test]
    fn test_classify_status_branches() {
        assert_eq!(
            ErrorKind::classify(&status_error(StatusCode::UNAUTHORIZED)),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            ErrorKind::classify(&status_error(StatusCode::UNPROCESSABLE_ENTITY)),
            ErrorKind::UnprocessableInput
        );
        assert_eq!(
            ErrorKind::classify(&status_error(StatusCode::INTERNAL_SERVER_ERROR)),
            ErrorKind::ServerFault
        );
        // 400 is register-only Conflict territory; shared classification
        // treats it as a plain server fault.
        assert_eq!(
            ErrorKind::classify(&status_error(StatusCode::BAD_REQUEST)),
            ErrorKind::ServerFault
        );
    }

    #[test]
    fn test_classify_non_status_shapes() {
        assert_eq!(
            ErrorKind::classify(&GatewayError::InvalidResponse("bad body".to_string())),
            ErrorKind::InvalidServerResponse
        );
        assert_eq!(
            ErrorKind::classify(&GatewayError::Request("builder".to_string())),
            ErrorKind::Unknown
        );
    }

    #[test]
    fn test_validation_wraps_into_kind() {
        let kind: ErrorKind = ValidationError::PasswordTooShort.into();
        assert_eq!(kind, ErrorKind::Validation(ValidationError::PasswordTooShort));
    }
}
