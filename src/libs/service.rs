//! Task service: lookup, listing, deletion, and the patch-merge update.
//!
//! The service is a thin layer over an injected [`TaskStore`]. Its one
//! piece of real logic is [`TaskService::update`], which merges a
//! [`TaskPatch`] onto a stored task field by field:
//!
//! - `title` is replaced only by a non-empty value (after trimming), and
//!   the trimmed value is what gets stored;
//! - `description` is replaced whenever the patch carries one; an empty
//!   string is a valid replacement and is stored as-is;
//! - `status` follows the session's [`StatusMerge`] policy.

use crate::libs::error::TaskError;
use crate::libs::task::{Task, TaskPatch, TaskStatus};
use crate::msg_debug;
use crate::store::TaskStore;

/// How `update` treats a patch without a status.
///
/// Historically this code had two behaviors in circulation: overwrite the
/// stored status with whatever the patch carries (clearing it when the
/// patch carries none), and only overwrite when the patch actually has a
/// status. The second one is the default; clearing a status because the
/// caller didn't mention it is almost never what anyone wants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusMerge {
    /// Keep the stored status when the patch has none.
    #[default]
    PreserveMissing,
    /// Replace the stored status unconditionally, clearing it when the
    /// patch has none.
    OverwriteAlways,
}

pub struct TaskService<S: TaskStore> {
    store: S,
    status_merge: StatusMerge,
}

impl<S: TaskStore> TaskService<S> {
    pub fn new(store: S) -> Self {
        Self::with_status_merge(store, StatusMerge::default())
    }

    pub fn with_status_merge(store: S, status_merge: StatusMerge) -> Self {
        TaskService { store, status_merge }
    }

    /// Access to the underlying store, for callers that need operations
    /// outside the service surface (e.g. the menu's duplicate-checked add).
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// All tasks, in store order.
    pub fn list(&self) -> Result<Vec<Task>, TaskError> {
        self.store.find_all()
    }

    /// Tasks whose status equals `status`; empty when none match.
    pub fn list_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, TaskError> {
        self.store.find_by_status(status)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Task, TaskError> {
        self.store.find_by_id(id)?.ok_or(TaskError::NotFound(id))
    }

    /// Persist a new task, returning the stored copy (with its id).
    pub fn create(&mut self, task: Task) -> Result<Task, TaskError> {
        self.store.save(task)
    }

    /// Merge `patch` onto the stored task and persist the result.
    ///
    /// The lookup happens before any mutation; a missing id fails with
    /// `NotFound` and the store's `save` is never reached. Returns exactly
    /// what the store returns, which may differ from the merged in-memory
    /// value if the store normalizes on save.
    pub fn update(&mut self, id: i64, patch: &TaskPatch) -> Result<Task, TaskError> {
        let mut task = self.store.find_by_id(id)?.ok_or(TaskError::NotFound(id))?;
        msg_debug!("Updating task {} with patch {:?}", id, patch);

        if let Some(title) = &patch.title {
            let trimmed = title.trim();
            if !trimmed.is_empty() {
                task.title = trimmed.to_string();
            }
        }
        if let Some(description) = &patch.description {
            task.description = Some(description.clone());
        }
        match self.status_merge {
            StatusMerge::PreserveMissing => {
                if let Some(status) = patch.status {
                    task.status = Some(status);
                }
            }
            StatusMerge::OverwriteAlways => task.status = patch.status,
        }

        self.store.save(task)
    }

    /// Delete the task with `id`.
    ///
    /// Resolves the record first and hands the resolved instance to the
    /// store, so stores that differentiate delete-by-identity from
    /// delete-by-key see the actual record.
    pub fn delete(&mut self, id: i64) -> Result<(), TaskError> {
        let task = self.store.find_by_id(id)?.ok_or(TaskError::NotFound(id))?;
        self.store.delete(&task)
    }
}
