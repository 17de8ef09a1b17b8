/*
[INPUT]:  Raw JSON response bodies from the task service
[OUTPUT]: Typed response structs
[POS]:    Data layer - response type definitions
[UPDATE]: When endpoint response bodies change
*/

use serde::{Deserialize, Serialize};

/// Response from POST /login.
///
/// A response missing `access_token` entirely fails deserialization and
/// surfaces as an invalid-response failure; an empty token decodes fine and
/// is the caller's job to reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Plain acknowledgement body ({"message": ...})
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AckMessage {
    pub message: String,
}
