/*
[INPUT]:  Session state and task mutations from the view
[OUTPUT]: Task collection ownership and edit-mode state
[POS]:    Task domain logic - module wiring
[UPDATE]: When the store or edit surface change
*/

pub mod edit;
pub mod store;

pub use edit::{EditBuffer, EditSession};
pub use store::{ConfirmDelete, TaskStore};
