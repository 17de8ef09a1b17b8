/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod auth;
pub mod client;
pub mod error;
pub mod tasks;

pub use error::{GatewayError, Result};

pub use client::{ClientConfig, TaskApiClient};

// Status codes travel with the error type; consumers match on them without
// pulling in reqwest themselves.
pub use reqwest::StatusCode;
