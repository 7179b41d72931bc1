use thiserror::Error;

/// Errors raised by the task service and the stores beneath it.
///
/// Everything is synchronous and single-step, so there are no partial
/// failures to report: an operation either completes or returns one of
/// these to the immediate caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task not found with id: {0}")]
    NotFound(i64),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
