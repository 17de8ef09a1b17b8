/*
[INPUT]:  Session token, gateway client, and task mutations from the view
[OUTPUT]: Pessimistically updated task collection with per-operation errors
[POS]:    Task domain logic - CRUD mediator and collection owner
[UPDATE]: When task operations, apply rules, or error surfacing change
*/

use std::sync::{Arc, RwLock};

use taskdeck_adapter::{CreateTaskRequest, EditTaskRequest, Task, TaskApiClient};
use tracing::{info, warn};

use crate::error::{ErrorKind, StoreError, TaskOp, ValidationError};
use crate::session::SessionManager;
use crate::tasks::edit::{EditBuffer, EditSession};

/// Explicit confirmation step required before a delete is dispatched
pub trait ConfirmDelete {
    fn confirm_delete(&self, task: &Task) -> bool;
}

/// Owns the task collection and mediates all CRUD against the service.
///
/// Every update is pessimistic: local state changes only when the server's
/// authoritative value arrives. Operations take `&self` and may run
/// concurrently; the store does not serialize, deduplicate, or cancel
/// requests, so when two mutations target the same task the response that
/// resolves last is applied last. Locks are held only across synchronous
/// sections, never across an await.
#[derive(Debug)]
pub struct TaskStore {
    client: Arc<TaskApiClient>,
    session: SessionManager,
    tasks: RwLock<Vec<Task>>,
    edit: EditSession,
    last_error: RwLock<Option<StoreError>>,
}

impl TaskStore {
    pub fn new(client: Arc<TaskApiClient>, session: SessionManager) -> Self {
        Self {
            client,
            session,
            tasks: RwLock::new(Vec::new()),
            edit: EditSession::new(),
            last_error: RwLock::new(None),
        }
    }

    /// Snapshot of the current collection
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.read().unwrap().clone()
    }

    /// Snapshot of one task by id
    pub fn task(&self, task_id: i64) -> Option<Task> {
        self.tasks
            .read()
            .unwrap()
            .iter()
            .find(|task| task.id == task_id)
            .cloned()
    }

    /// The store's single current error, if the last attempt failed
    pub fn last_error(&self) -> Option<StoreError> {
        self.last_error.read().unwrap().clone()
    }

    /// The nested inline-edit state machine
    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    /// Fetch the full collection and replace local state atomically.
    ///
    /// A generic failure leaves the previous collection untouched; a 401
    /// tears the session down and the caller navigates back to auth.
    pub async fn load(&self) -> Result<(), StoreError> {
        self.begin_attempt();
        let token = self.authorized_token(TaskOp::Load)?;

        match self.client.list_tasks(&token).await {
            Ok(fetched) => {
                info!(count = fetched.len(), "task collection loaded");
                *self.tasks.write().unwrap() = fetched;
                Ok(())
            }
            Err(err) => Err(self.fail(TaskOp::Load, &err)),
        }
    }

    /// Create a task and append the server's echo to the collection.
    ///
    /// The title is trimmed and required non-empty before any network call;
    /// an empty description is normalized to an explicit absent value. On
    /// failure no local placeholder survives.
    pub async fn create(&self, title: &str, description: &str) -> Result<Task, StoreError> {
        self.begin_attempt();

        let title = title.trim();
        if title.is_empty() {
            return Err(self.record(
                TaskOp::Create,
                ErrorKind::Validation(ValidationError::EmptyTitle),
            ));
        }

        let token = self.authorized_token(TaskOp::Create)?;
        let request = CreateTaskRequest {
            title: title.to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
        };

        match self.client.create_task(&token, &request).await {
            Ok(created) => {
                info!(task_id = created.id, "task created");
                self.tasks.write().unwrap().push(created.clone());
                Ok(created)
            }
            Err(err) => Err(self.fail(TaskOp::Create, &err)),
        }
    }

    /// Flip a task's completion flag on the server, then apply its echo.
    ///
    /// Pessimistic: the local flag is untouched until the response arrives;
    /// the negation is computed from the snapshot the caller passed in.
    pub async fn toggle_complete(&self, task: &Task) -> Result<Task, StoreError> {
        self.begin_attempt();
        let token = self.authorized_token(TaskOp::Toggle)?;

        match self
            .client
            .set_completed(&token, task.id, !task.completed)
            .await
        {
            Ok(updated) => {
                self.replace_task(&updated);
                Ok(updated)
            }
            Err(err) => Err(self.fail(TaskOp::Toggle, &err)),
        }
    }

    /// Delete a task after an explicit confirmation step.
    ///
    /// A declined confirmation is a no-op: no request, no error, and the
    /// previous error (if any) stays as it was, since nothing was
    /// attempted. Deleting an id that is no longer in the collection is
    /// also a no-op.
    pub async fn delete(
        &self,
        task_id: i64,
        prompt: &dyn ConfirmDelete,
    ) -> Result<(), StoreError> {
        let Some(task) = self.task(task_id) else {
            return Ok(());
        };
        if !prompt.confirm_delete(&task) {
            return Ok(());
        }

        self.begin_attempt();
        let token = self.authorized_token(TaskOp::Delete)?;

        match self.client.delete_task(&token, task_id).await {
            Ok(_) => {
                info!(task_id, "task deleted");
                self.tasks.write().unwrap().retain(|task| task.id != task_id);
                Ok(())
            }
            Err(err) => Err(self.fail(TaskOp::Delete, &err)),
        }
    }

    /// Begin editing a task; see `EditSession::start`
    pub fn start_edit(&self, task_id: i64) {
        if let Some(task) = self.task(task_id) {
            self.edit.start(&task);
        }
    }

    /// Discard the active draft
    pub fn cancel_edit(&self) {
        self.edit.cancel();
    }

    /// Save the active edit buffer.
    ///
    /// Success replaces the matching entry with the server's echo and ends
    /// the edit session; failure leaves the buffer intact so the user stays
    /// in edit mode. With no active buffer this is a no-op.
    pub async fn save_edit(&self) -> Result<(), StoreError> {
        let Some(EditBuffer {
            task_id,
            title,
            description,
        }) = self.edit.buffer()
        else {
            return Ok(());
        };

        self.begin_attempt();
        let token = self.authorized_token(TaskOp::SaveEdit)?;
        let request = EditTaskRequest { title, description };

        match self.client.update_task(&token, task_id, &request).await {
            Ok(updated) => {
                info!(task_id, "task edit saved");
                self.replace_task(&updated);
                self.edit.cancel();
                Ok(())
            }
            Err(err) => Err(self.fail(TaskOp::SaveEdit, &err)),
        }
    }

    /// End the session, notifying the server on a best-effort basis.
    ///
    /// The server call's failure is logged and ignored; the local session
    /// is torn down either way. The in-memory collection is left alone —
    /// discarding it on navigation is the presentation layer's job.
    pub async fn logout(&self) {
        if let Some(token) = self.session.token() {
            if let Err(err) = self.client.logout(&token).await {
                warn!(error = %err, "logout request failed; clearing session anyway");
            }
        }
        self.session.clear();
    }

    /// Clear the previous error; every new attempt starts clean
    fn begin_attempt(&self) {
        *self.last_error.write().unwrap() = None;
    }

    fn authorized_token(&self, op: TaskOp) -> Result<String, StoreError> {
        match self.session.token() {
            Some(token) => Ok(token),
            None => Err(self.record(op, ErrorKind::Unauthorized)),
        }
    }

    /// Classify a gateway failure and record it. A 401 on any authenticated
    /// operation tears the session down here, at the call site that saw it.
    fn fail(&self, op: TaskOp, err: &taskdeck_adapter::GatewayError) -> StoreError {
        warn!(?op, error = %err, "task operation failed");
        self.record(op, ErrorKind::classify(err))
    }

    fn record(&self, op: TaskOp, kind: ErrorKind) -> StoreError {
        if kind == ErrorKind::Unauthorized {
            self.session.clear();
        }
        let error = StoreError { op, kind };
        *self.last_error.write().unwrap() = Some(error.clone());
        error
    }

    /// Replace the matching-id entry with the server's authoritative value.
    /// A vanished id (deleted while the request was in flight) applies
    /// nothing.
    fn replace_task(&self, updated: &Task) {
        let mut tasks = self.tasks.write().unwrap();
        if let Some(slot) = tasks.iter_mut().find(|task| task.id == updated.id) {
            *slot = updated.clone();
        }
    }
}
