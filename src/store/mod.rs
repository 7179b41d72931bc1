//! Storage layer for taskdeck.
//!
//! The service logic never talks to a concrete container; it goes through
//! the [`TaskStore`] trait so the same merge and lookup routines run
//! unchanged against any backend. The crate ships a single in-memory
//! implementation, which is all the interactive session needs.
//!
//! ## Usage
//!
//! ```rust
//! use taskdeck::store::{memory::MemoryTaskStore, TaskStore};
//! use taskdeck::libs::task::Task;
//!
//! let mut store = MemoryTaskStore::new();
//! let saved = store.save(Task::new("Review code", Some("Check PR #123")))?;
//! assert!(saved.id.is_some());
//! # Ok::<(), taskdeck::libs::error::TaskError>(())
//! ```

use crate::libs::error::TaskError;
use crate::libs::task::{Task, TaskStatus};

/// In-memory task storage with linear-scan lookup.
pub mod memory;

/// The persistence capability injected into the task service.
///
/// `save` is an upsert: a task without an id is assigned one and inserted,
/// a task with an id replaces the stored record. `delete` takes the
/// resolved record instance rather than a raw id, so implementations that
/// distinguish delete-by-identity from delete-by-key can do so.
pub trait TaskStore {
    fn find_by_id(&self, id: i64) -> Result<Option<Task>, TaskError>;
    fn save(&mut self, task: Task) -> Result<Task, TaskError>;
    fn delete(&mut self, task: &Task) -> Result<(), TaskError>;
    fn find_all(&self) -> Result<Vec<Task>, TaskError>;
    fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, TaskError>;
}
