/*
[INPUT]:  Tagged error kinds from the auth and task flows
[OUTPUT]: User-facing message text
[POS]:    Presentation mapping layer - error kind to display string
[UPDATE]: When display wording changes
*/

use std::borrow::Cow;

use crate::error::{ErrorKind, StoreError, TaskOp, ValidationError};

/// Text for a validation failure
pub fn validation_message(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::MissingFields => "Please fill in all fields",
        ValidationError::InvalidEmail => "Please enter a valid email address",
        ValidationError::PasswordTooShort => "Password must be at least 6 characters",
        ValidationError::PasswordMismatch => "Passwords do not match",
        ValidationError::EmptyTitle => "Task title is required",
    }
}

/// Text for a failure in the login or register flow
pub fn auth_message(kind: &ErrorKind) -> Cow<'static, str> {
    match kind {
        ErrorKind::Validation(err) => Cow::Borrowed(validation_message(err)),
        ErrorKind::Unauthorized => Cow::Borrowed("Incorrect email or password"),
        ErrorKind::Conflict { detail: Some(detail) } => Cow::Owned(detail.clone()),
        ErrorKind::Conflict { detail: None } => Cow::Borrowed("Email already registered"),
        ErrorKind::UnprocessableInput => Cow::Borrowed("Invalid input. Please check your data."),
        ErrorKind::ServerFault => Cow::Borrowed("Server error. Please try again later."),
        ErrorKind::TransportFailure => {
            Cow::Borrowed("Cannot connect to server. Please check your connection.")
        }
        ErrorKind::InvalidServerResponse => Cow::Borrowed("Invalid response from server"),
        ErrorKind::Unknown => {
            Cow::Borrowed("An unexpected error occurred. Please try again.")
        }
    }
}

/// Text for a failed task operation.
///
/// Validation and connectivity failures keep their specific wording; other
/// kinds collapse into the per-operation message the task screen shows.
pub fn task_message(err: &StoreError) -> Cow<'static, str> {
    match &err.kind {
        ErrorKind::Validation(validation) => Cow::Borrowed(validation_message(validation)),
        ErrorKind::TransportFailure => {
            Cow::Borrowed("Cannot connect to server. Please check your connection.")
        }
        _ => Cow::Borrowed(match err.op {
            TaskOp::Load => "Failed to load tasks",
            TaskOp::Create => "Failed to add task",
            TaskOp::Toggle | TaskOp::SaveEdit => "Failed to update task",
            TaskOp::Delete => "Failed to delete task",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_wording() {
        assert_eq!(
            validation_message(&ValidationError::PasswordTooShort),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            validation_message(&ValidationError::EmptyTitle),
            "Task title is required"
        );
    }

    #[test]
    fn test_auth_conflict_prefers_server_detail() {
        let with_detail = ErrorKind::Conflict {
            detail: Some("Email already registered".to_string()),
        };
        assert_eq!(auth_message(&with_detail), "Email already registered");

        let without = ErrorKind::Conflict { detail: None };
        assert_eq!(auth_message(&without), "Email already registered");
    }

    #[test]
    fn test_auth_branch_wording() {
        assert_eq!(
            auth_message(&ErrorKind::Unauthorized),
            "Incorrect email or password"
        );
        assert_eq!(
            auth_message(&ErrorKind::InvalidServerResponse),
            "Invalid response from server"
        );
        assert_eq!(
            auth_message(&ErrorKind::TransportFailure),
            "Cannot connect to server. Please check your connection."
        );
    }

    #[test]
    fn test_task_wording_per_operation() {
        let load = StoreError { op: TaskOp::Load, kind: ErrorKind::ServerFault };
        assert_eq!(task_message(&load), "Failed to load tasks");

        let toggle = StoreError { op: TaskOp::Toggle, kind: ErrorKind::ServerFault };
        assert_eq!(task_message(&toggle), "Failed to update task");

        let create = StoreError {
            op: TaskOp::Create,
            kind: ErrorKind::Validation(ValidationError::EmptyTitle),
        };
        assert_eq!(task_message(&create), "Task title is required");
    }
}
