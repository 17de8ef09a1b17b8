/*
[INPUT]:  Access tokens and a KvStore persistence collaborator
[OUTPUT]: Token retrieval and authenticated/unauthenticated state
[POS]:    Session layer - token lifecycle management
[UPDATE]: When adding token metadata or changing storage strategy
*/

pub mod kv;

use std::sync::{Arc, RwLock};

use tracing::info;

pub use kv::{FileKvStore, KvStore, MemoryKvStore};

/// The single fixed key the session token is persisted under
pub const TOKEN_KEY: &str = "token";

/// Owns the authentication-token lifecycle.
///
/// The token is the sole piece of process-wide state: explicit init on
/// login success, explicit teardown on logout or any 401. There is no
/// expiry timer; collaborators observing a 401 call `clear()` and route
/// back to the auth flow.
#[derive(Debug, Clone)]
pub struct SessionManager {
    store: Arc<dyn KvStore>,
    token: Arc<RwLock<Option<String>>>,
}

impl SessionManager {
    /// Create a manager, rehydrating any previously persisted token
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        let token = store.get(TOKEN_KEY);
        if token.is_some() {
            info!("restored persisted session token");
        }
        Self {
            store,
            token: Arc::new(RwLock::new(token)),
        }
    }

    /// Get the current token if a session is established
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    /// Whether a session is currently established
    pub fn is_authenticated(&self) -> bool {
        self.token.read().unwrap().is_some()
    }

    /// Establish a session: persist the token and mark authenticated
    pub fn set_token(&self, token: String) {
        self.store.set(TOKEN_KEY, &token);
        *self.token.write().unwrap() = Some(token);
    }

    /// Tear the session down: remove the persisted token and mark
    /// unauthenticated
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        *self.token.write().unwrap() = None;
    }
}
