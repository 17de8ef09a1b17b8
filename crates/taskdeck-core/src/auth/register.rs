/*
[INPUT]:  Registration fields from the presentation layer, gateway
[OUTPUT]: Validated single-flight registration with a one-shot success grace
[POS]:    Auth layer - register flow state machine
[UPDATE]: When register states, validation, or the redirect grace change
*/

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use taskdeck_adapter::{GatewayError, RegisterRequest, StatusCode, TaskApiClient};
use tracing::{info, warn};

use crate::auth::validate::validate_register;
use crate::error::ErrorKind;

/// Grace period shown after a successful registration before the flow
/// hands control back to login. A display pause, never a retry or poll.
pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Register flow states.
///
/// Transitions:
/// - Idle -> Validating (on submit)
/// - Validating -> Submitting (local validation passed)
/// - Validating -> Failed (local validation failed)
/// - Submitting -> Succeeded | Failed (response arrived)
/// - Succeeded -> Idle (after the redirect grace)
/// - Failed -> Idle (on reset)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed(ErrorKind),
}

/// Outcome of one submit call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Account created; the flow is in its one-shot Succeeded state
    Registered,
    /// Attempt rejected locally or by the server
    Failed(ErrorKind),
    /// A previous attempt is still awaiting its response; nothing was sent
    AlreadyInFlight,
}

/// Register flow state machine
#[derive(Debug, Clone)]
pub struct RegisterFlow {
    client: Arc<TaskApiClient>,
    state: Arc<RwLock<RegisterState>>,
    error: Arc<RwLock<Option<ErrorKind>>>,
    redirect_started: Arc<AtomicBool>,
    redirect_delay: Duration,
}

impl RegisterFlow {
    pub fn new(client: Arc<TaskApiClient>) -> Self {
        Self::with_redirect_delay(client, SUCCESS_REDIRECT_DELAY)
    }

    /// Construct with an explicit grace duration (tests use a short one)
    pub fn with_redirect_delay(client: Arc<TaskApiClient>, redirect_delay: Duration) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(RegisterState::Idle)),
            error: Arc::new(RwLock::new(None)),
            redirect_started: Arc::new(AtomicBool::new(false)),
            redirect_delay,
        }
    }

    /// Current state
    pub fn state(&self) -> RegisterState {
        self.state.read().unwrap().clone()
    }

    /// The single current error message source, if the last attempt failed
    pub fn error(&self) -> Option<ErrorKind> {
        self.error.read().unwrap().clone()
    }

    /// Return a failed attempt to Idle
    pub fn reset(&self) {
        let mut state = self.state.write().unwrap();
        if matches!(*state, RegisterState::Failed(_)) {
            *state = RegisterState::Idle;
        }
    }

    /// Run one registration attempt.
    ///
    /// Single-flight like login; a re-entrant call while `Submitting`
    /// returns `AlreadyInFlight` without touching the wire.
    pub async fn submit(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> RegisterOutcome {
        {
            let mut state = self.state.write().unwrap();
            if *state == RegisterState::Submitting {
                return RegisterOutcome::AlreadyInFlight;
            }
            *state = RegisterState::Validating;
        }
        *self.error.write().unwrap() = None;
        self.redirect_started.store(false, Ordering::SeqCst);

        if let Err(validation) = validate_register(email, password, confirm_password) {
            return RegisterOutcome::Failed(self.fail(ErrorKind::Validation(validation)));
        }

        *self.state.write().unwrap() = RegisterState::Submitting;

        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.client.register(&request).await {
            Ok(user) => {
                *self.state.write().unwrap() = RegisterState::Succeeded;
                info!(user_id = user.id, "registration succeeded");
                RegisterOutcome::Registered
            }
            Err(err) => {
                warn!(error = %err, "registration rejected");
                RegisterOutcome::Failed(self.fail(classify_register_failure(&err)))
            }
        }
    }

    /// One-shot grace after success: sleep the fixed delay, then return the
    /// machine to Idle so the caller switches to the login flow.
    ///
    /// Not cancellable, not restartable: only the first call after a
    /// success runs the delay; later calls (or calls in any other state)
    /// return false immediately.
    pub async fn redirect_grace(&self) -> bool {
        if self.state() != RegisterState::Succeeded {
            return false;
        }
        if self.redirect_started.swap(true, Ordering::SeqCst) {
            return false;
        }

        tokio::time::sleep(self.redirect_delay).await;
        *self.state.write().unwrap() = RegisterState::Idle;
        true
    }

    fn fail(&self, kind: ErrorKind) -> ErrorKind {
        *self.error.write().unwrap() = Some(kind.clone());
        *self.state.write().unwrap() = RegisterState::Failed(kind.clone());
        kind
    }
}

/// Call-site classification: on register a 400 is a duplicate-account
/// conflict carrying the server's detail text when present
fn classify_register_failure(err: &GatewayError) -> ErrorKind {
    match err.status() {
        Some(StatusCode::BAD_REQUEST) => ErrorKind::Conflict {
            detail: err.detail_message(),
        },
        _ => ErrorKind::classify(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use taskdeck_adapter::ClientConfig;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::error::ValidationError;

    fn flow_against(server: &MockServer) -> RegisterFlow {
        let client = TaskApiClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");
        RegisterFlow::with_redirect_delay(Arc::new(client), Duration::from_millis(10))
    }

    #[tokio::test]
    async fn test_successful_registration_enters_succeeded() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/register"))
            .and(body_json(serde_json::json!({
                "email": "new@test.com",
                "password": "secret1",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 5,
                "email": "new@test.com",
                "created_at": "2024-01-01T00:00:00Z",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let flow = flow_against(&server);
        let outcome = flow.submit("new@test.com", "secret1", "secret1").await;

        assert_eq!(outcome, RegisterOutcome::Registered);
        assert_eq!(flow.state(), RegisterState::Succeeded);
    }

    #[tokio::test]
    async fn test_short_password_fails_locally_with_zero_requests() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let flow = flow_against(&server);
        let outcome = flow.submit("user@test.com", "12345", "12345").await;

        assert_eq!(
            outcome,
            RegisterOutcome::Failed(ErrorKind::Validation(ValidationError::PasswordTooShort))
        );
    }

    #[tokio::test]
    async fn test_duplicate_email_becomes_conflict_with_detail() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "detail": "Email already registered",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let flow = flow_against(&server);
        let outcome = flow.submit("dup@test.com", "secret1", "secret1").await;

        assert_eq!(
            outcome,
            RegisterOutcome::Failed(ErrorKind::Conflict {
                detail: Some("Email already registered".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_conflict_without_body_keeps_generic_detail() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(400))
            .expect(1)
            .mount(&server)
            .await;

        let flow = flow_against(&server);
        let outcome = flow.submit("dup@test.com", "secret1", "secret1").await;

        assert_eq!(
            outcome,
            RegisterOutcome::Failed(ErrorKind::Conflict { detail: None })
        );
    }

    #[tokio::test]
    async fn test_redirect_grace_is_one_shot() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 5,
                "email": "new@test.com",
                "created_at": "2024-01-01T00:00:00Z",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let flow = flow_against(&server);
        flow.submit("new@test.com", "secret1", "secret1").await;

        assert!(flow.redirect_grace().await);
        assert_eq!(flow.state(), RegisterState::Idle);

        // Second call has nothing to do.
        assert!(!flow.redirect_grace().await);
    }

    #[tokio::test]
    async fn test_redirect_grace_requires_success() {
        let server = MockServer::start().await;
        let flow = flow_against(&server);

        assert!(!flow.redirect_grace().await);

        flow.submit("", "", "").await;
        assert!(!flow.redirect_grace().await);
        assert!(matches!(flow.state(), RegisterState::Failed(_)));
    }
}
