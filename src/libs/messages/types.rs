/// Every user-facing message in taskdeck.
///
/// Keeping the text behind one enum keeps wording consistent between the
/// menu session and the log output, and keeps format parameters typed.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TaskAlreadyExists(i64),
    TaskIdRequired,
    TasksHeader,
    TasksWithStatusHeader(String),
    NoTasksFound,
    NoTasksWithStatus(String),
    CurrentTaskState,
    SeededDemoTasks(usize),

    // === MENU MESSAGES ===
    MenuWelcome,
    MenuGoodbye,
    OperationCancelled,
    ConfirmDeleteTask(String),

    // === PROMPTS ===
    PromptMenuChoice,
    PromptTaskId,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskStatus,
    PromptKeepCurrentValue,
}
