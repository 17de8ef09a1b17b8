/*
[INPUT]:  A task snapshot and draft field mutations
[OUTPUT]: Validated inline-edit state transitions
[POS]:    Task domain logic - edit-mode state machine
[UPDATE]: When edit-mode transitions or the buffer shape change
*/

use std::sync::RwLock;

use taskdeck_adapter::Task;

/// Mutable scratch copy of a task's editable fields.
///
/// Seeded from a snapshot of the task, never a live reference; draft
/// mutation does not touch the stored task until a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub task_id: i64,
    pub title: String,
    pub description: Option<String>,
}

/// Inline-edit state machine: Inactive, or Active with exactly one buffer.
///
/// Transitions:
/// - Inactive -> Active (on start)
/// - Active -> Active (starting a new edit replaces the target)
/// - Active -> Inactive (on cancel, or on successful save)
#[derive(Debug, Default)]
pub struct EditSession {
    buffer: RwLock<Option<EditBuffer>>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an edit is currently active
    pub fn is_active(&self) -> bool {
        self.buffer.read().unwrap().is_some()
    }

    /// Whether the active edit targets the given task
    pub fn is_editing(&self, task_id: i64) -> bool {
        self.buffer
            .read()
            .unwrap()
            .as_ref()
            .is_some_and(|buffer| buffer.task_id == task_id)
    }

    /// Snapshot of the active buffer, if any
    pub fn buffer(&self) -> Option<EditBuffer> {
        self.buffer.read().unwrap().clone()
    }

    /// Begin editing a task, seeding the draft from a private snapshot.
    /// An already-active session is replaced; at most one exists.
    pub fn start(&self, task: &Task) {
        *self.buffer.write().unwrap() = Some(EditBuffer {
            task_id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
        });
    }

    /// Discard the draft unconditionally
    pub fn cancel(&self) {
        *self.buffer.write().unwrap() = None;
    }

    /// Replace the draft title; no-op while inactive
    pub fn set_title(&self, title: impl Into<String>) {
        if let Some(buffer) = self.buffer.write().unwrap().as_mut() {
            buffer.title = title.into();
        }
    }

    /// Replace the draft description; no-op while inactive
    pub fn set_description(&self, description: Option<String>) {
        if let Some(buffer) = self.buffer.write().unwrap().as_mut() {
            buffer.description = description;
        }
    }
}
