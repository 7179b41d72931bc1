use super::TaskStore;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskStatus};

/// Unordered in-memory task collection.
///
/// Lookups are linear scans; at interactive-session scale that is plenty.
/// Doubles as the collection-manager surface from the menu session via
/// [`MemoryTaskStore::add`], which rejects duplicate ids instead of
/// upserting like [`TaskStore::save`] does.
#[derive(Debug)]
pub struct MemoryTaskStore {
    tasks: Vec<Task>,
    next_id: i64,
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        MemoryTaskStore { tasks: Vec::new(), next_id: 1 }
    }

    /// Insert a task that already carries an id.
    ///
    /// Fails with `InvalidArgument` when the id is missing or when a task
    /// with the same id is already stored.
    pub fn add(&mut self, task: Task) -> Result<Task, TaskError> {
        let id = task
            .id
            .ok_or_else(|| TaskError::InvalidArgument(Message::TaskIdRequired.to_string()))?;
        if self.tasks.iter().any(|t| t.id == Some(id)) {
            return Err(TaskError::InvalidArgument(Message::TaskAlreadyExists(id).to_string()));
        }
        self.bump_next_id(id);
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn bump_next_id(&mut self, seen: i64) {
        if seen >= self.next_id {
            self.next_id = seen + 1;
        }
    }
}

impl TaskStore for MemoryTaskStore {
    fn find_by_id(&self, id: i64) -> Result<Option<Task>, TaskError> {
        Ok(self.tasks.iter().find(|t| t.id == Some(id)).cloned())
    }

    fn save(&mut self, mut task: Task) -> Result<Task, TaskError> {
        match task.id {
            None => {
                task.id = Some(self.next_id);
                self.next_id += 1;
                self.tasks.push(task.clone());
            }
            Some(id) => {
                self.bump_next_id(id);
                match self.tasks.iter_mut().find(|t| t.id == Some(id)) {
                    Some(stored) => *stored = task.clone(),
                    None => self.tasks.push(task.clone()),
                }
            }
        }
        Ok(task)
    }

    fn delete(&mut self, task: &Task) -> Result<(), TaskError> {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == task.id && t.id.is_some()) {
            self.tasks.remove(pos);
        }
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<Task>, TaskError> {
        Ok(self.tasks.clone())
    }

    fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, TaskError> {
        Ok(self.tasks.iter().filter(|t| t.status == Some(status)).cloned().collect())
    }
}
