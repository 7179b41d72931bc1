//! Display implementation for taskdeck messages.
//!
//! Single source of truth for all user-facing text. Messages with dynamic
//! content interpolate typed parameters, so a wrong argument is a compile
//! error rather than a runtime surprise.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created successfully", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated successfully", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task not found with id: {}", id),
            Message::TaskAlreadyExists(id) => format!("Task with id {} already exists", id),
            Message::TaskIdRequired => "Task id is required".to_string(),
            Message::TasksHeader => "--- All Tasks ---".to_string(),
            Message::TasksWithStatusHeader(status) => format!("--- Tasks with status {} ---", status),
            Message::NoTasksFound => "No tasks available".to_string(),
            Message::NoTasksWithStatus(status) => format!("No tasks with status {}", status),
            Message::CurrentTaskState => "Current task state:".to_string(),
            Message::SeededDemoTasks(count) => format!("Seeded {} demo tasks", count),

            // === MENU MESSAGES ===
            Message::MenuWelcome => "Welcome to taskdeck!".to_string(),
            Message::MenuGoodbye => "Exiting. Goodbye!".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),

            // === PROMPTS ===
            Message::PromptMenuChoice => "What would you like to do?".to_string(),
            Message::PromptTaskId => "Task id".to_string(),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Task description".to_string(),
            Message::PromptTaskStatus => "Task status".to_string(),
            Message::PromptKeepCurrentValue => "Press Enter to keep the current value".to_string(),
        };
        write!(f, "{}", text)
    }
}
