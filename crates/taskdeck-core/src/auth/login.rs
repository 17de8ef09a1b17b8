/*
[INPUT]:  Credentials from the presentation layer, gateway, session manager
[OUTPUT]: Validated single-flight login attempts and session establishment
[POS]:    Auth layer - login flow state machine
[UPDATE]: When login states, validation, or failure classification change
*/

use std::sync::{Arc, RwLock};

use taskdeck_adapter::{GatewayError, LoginRequest, StatusCode, TaskApiClient};
use tracing::{info, warn};

use crate::auth::validate::validate_login;
use crate::error::ErrorKind;
use crate::session::SessionManager;

/// Login flow states.
///
/// Transitions:
/// - Idle -> Validating (on submit)
/// - Validating -> Submitting (local validation passed)
/// - Validating -> Failed (local validation failed)
/// - Submitting -> Success | Failed (response arrived)
/// - Success | Failed -> Idle (on reset)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    Idle,
    Validating,
    Submitting,
    Success,
    Failed(ErrorKind),
}

/// Outcome of one submit call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session established
    LoggedIn,
    /// Attempt rejected locally or by the server
    Failed(ErrorKind),
    /// A previous attempt is still awaiting its response; nothing was sent
    AlreadyInFlight,
}

/// Login flow state machine.
///
/// Holds its state behind a lock so the single-flight guard is the
/// machine's own responsibility rather than the caller's.
#[derive(Debug, Clone)]
pub struct LoginFlow {
    client: Arc<TaskApiClient>,
    session: SessionManager,
    state: Arc<RwLock<LoginState>>,
    error: Arc<RwLock<Option<ErrorKind>>>,
}

impl LoginFlow {
    pub fn new(client: Arc<TaskApiClient>, session: SessionManager) -> Self {
        Self {
            client,
            session,
            state: Arc::new(RwLock::new(LoginState::Idle)),
            error: Arc::new(RwLock::new(None)),
        }
    }

    /// Current state
    pub fn state(&self) -> LoginState {
        self.state.read().unwrap().clone()
    }

    /// The single current error message source, if the last attempt failed
    pub fn error(&self) -> Option<ErrorKind> {
        self.error.read().unwrap().clone()
    }

    /// Return a terminal state to Idle
    pub fn reset(&self) {
        let mut state = self.state.write().unwrap();
        if matches!(*state, LoginState::Success | LoginState::Failed(_)) {
            *state = LoginState::Idle;
        }
    }

    /// Run one login attempt.
    ///
    /// Exactly one request may be in flight; a re-entrant call while
    /// `Submitting` returns `AlreadyInFlight` without touching the wire.
    /// Any prior error is cleared at the start of the attempt.
    pub async fn submit(&self, email: &str, password: &str) -> LoginOutcome {
        {
            let mut state = self.state.write().unwrap();
            if *state == LoginState::Submitting {
                return LoginOutcome::AlreadyInFlight;
            }
            *state = LoginState::Validating;
        }
        *self.error.write().unwrap() = None;

        if let Err(validation) = validate_login(email, password) {
            return LoginOutcome::Failed(self.fail(ErrorKind::Validation(validation)));
        }

        *self.state.write().unwrap() = LoginState::Submitting;

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.client.login(&request).await {
            Ok(response) if response.access_token.is_empty() => {
                // Transport succeeded but the body is unusable.
                LoginOutcome::Failed(self.fail(ErrorKind::InvalidServerResponse))
            }
            Ok(response) => {
                self.session.set_token(response.access_token);
                *self.state.write().unwrap() = LoginState::Success;
                info!("login succeeded");
                LoginOutcome::LoggedIn
            }
            Err(err) => {
                warn!(error = %err, "login rejected");
                LoginOutcome::Failed(self.fail(classify_login_failure(&err)))
            }
        }
    }

    fn fail(&self, kind: ErrorKind) -> ErrorKind {
        *self.error.write().unwrap() = Some(kind.clone());
        *self.state.write().unwrap() = LoginState::Failed(kind.clone());
        kind
    }
}

/// Call-site classification: on login a 401 means bad credentials
fn classify_login_failure(err: &GatewayError) -> ErrorKind {
    match err.status() {
        Some(StatusCode::UNAUTHORIZED) => ErrorKind::Unauthorized,
        _ => ErrorKind::classify(err),
    }
}
