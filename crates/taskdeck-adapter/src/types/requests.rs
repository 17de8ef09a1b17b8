/*
[INPUT]:  Caller-supplied credentials and task fields
[OUTPUT]: Serializable request bodies for the task service
[POS]:    Data layer - request type definitions
[UPDATE]: When endpoint request bodies change
*/

use serde::{Deserialize, Serialize};

/// Body for POST /login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for POST /register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Body for POST /tasks.
///
/// An absent description serializes as JSON `null`, matching the service's
/// optional field; it is never sent as an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
}

/// Body for PUT /tasks/{id} flipping only the completion flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleCompletedRequest {
    pub completed: bool,
}

/// Body for PUT /tasks/{id} rewriting the editable fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditTaskRequest {
    pub title: String,
    pub description: Option<String>,
}
