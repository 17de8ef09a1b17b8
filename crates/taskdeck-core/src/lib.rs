/*
[INPUT]:  Public API exports for taskdeck-core crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod auth;
pub mod config;
pub mod error;
pub mod messages;
pub mod session;
pub mod tasks;

// Re-export main types for convenience
pub use auth::{LoginFlow, LoginOutcome, LoginState, RegisterFlow, RegisterOutcome, RegisterState};
pub use config::AppConfig;
pub use error::{ErrorKind, StoreError, TaskOp, ValidationError};
pub use session::{FileKvStore, KvStore, MemoryKvStore, SessionManager};
pub use tasks::{ConfirmDelete, EditBuffer, EditSession, TaskStore};
