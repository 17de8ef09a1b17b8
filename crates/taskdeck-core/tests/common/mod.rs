/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskdeck-core tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use taskdeck_adapter::{ClientConfig, TaskApiClient};
use taskdeck_core::session::{KvStore, MemoryKvStore};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client wired to the given mock server
pub fn client_for(server: &MockServer) -> Arc<TaskApiClient> {
    Arc::new(
        TaskApiClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init"),
    )
}

/// JSON body for a task entity as the service serializes it
pub fn task_json(id: i64, title: &str, completed: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": null,
        "completed": completed,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
        "owner_id": 1,
    })
}

/// KvStore wrapper counting teardown calls, for exactly-once assertions
#[allow(dead_code)]
#[derive(Debug)]
pub struct CountingKvStore {
    inner: MemoryKvStore,
    removes: AtomicUsize,
}

#[allow(dead_code)]
impl CountingKvStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryKvStore::new(),
            removes: AtomicUsize::new(0),
        }
    }

    pub fn remove_count(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }
}

impl KvStore for CountingKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.inner.set(key, value);
    }

    fn remove(&self, key: &str) {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(key);
    }
}
