/*
[INPUT]:  Wire schema of the task service
[OUTPUT]: Typed models, requests, and responses
[POS]:    Data layer - module wiring
[UPDATE]: When adding new wire types
*/

pub mod models;
pub mod requests;
pub mod responses;

pub use models::{RegisteredUser, Task};
pub use requests::{
    CreateTaskRequest, EditTaskRequest, LoginRequest, RegisterRequest, ToggleCompletedRequest,
};
pub use responses::{AckMessage, TokenResponse};
