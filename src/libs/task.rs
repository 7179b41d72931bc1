use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// All statuses, in lifecycle order. Used by selection prompts.
    pub fn all() -> [TaskStatus; 3] {
        [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed]
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// None until the store assigns one; immutable afterwards.
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

impl Task {
    pub fn new(title: &str, description: Option<&str>) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.map(str::to_string),
            status: Some(TaskStatus::Pending),
        }
    }
}

/// A partially populated task: each field is applied to an existing
/// task only when present, per the merge policy in `libs::service`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}
