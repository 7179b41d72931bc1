//! Interactive menu session over an in-process task store.
//!
//! The session owns a `MemoryTaskStore` for its lifetime; tasks live as
//! long as the process. All task logic lives in `TaskService`; this
//! module only prompts, renders, and reports.

use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::service::{StatusMerge, TaskService};
use crate::libs::task::{Task, TaskPatch, TaskStatus};
use crate::libs::view::View;
use crate::store::memory::MemoryTaskStore;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

const MENU_ITEMS: &[&str] = &[
    "View all tasks",
    "Add a new task",
    "Find a task by id",
    "Edit a task",
    "Filter by status",
    "Delete a task",
    "Print tasks as JSON",
    "Exit",
];

pub fn run(policy: StatusMerge, seed: bool) -> Result<()> {
    let mut service = TaskService::with_status_merge(MemoryTaskStore::new(), policy);
    if seed {
        seed_demo_tasks(&mut service)?;
    }

    msg_print!(Message::MenuWelcome, true);

    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMenuChoice.to_string())
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => handle_list(&service)?,
            1 => handle_add(&mut service)?,
            2 => handle_find(&service)?,
            3 => handle_edit(&mut service)?,
            4 => handle_filter(&service)?,
            5 => handle_delete(&mut service)?,
            6 => handle_json(&service)?,
            _ => {
                msg_print!(Message::MenuGoodbye);
                return Ok(());
            }
        }
    }
}

fn seed_demo_tasks(service: &mut TaskService<MemoryTaskStore>) -> Result<()> {
    let mut proposal = Task::new("Write project proposal", Some("Draft and circulate for review"));
    proposal.status = Some(TaskStatus::InProgress);
    service.create(proposal)?;
    service.create(Task::new("Review pull request", None))?;

    msg_info!(Message::SeededDemoTasks(2));
    Ok(())
}

fn handle_list(service: &TaskService<MemoryTaskStore>) -> Result<()> {
    let tasks = service.list()?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks)?;
    Ok(())
}

fn handle_add(service: &mut TaskService<MemoryTaskStore>) -> Result<()> {
    let id: i64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskId.to_string())
        .interact_text()?;
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .interact_text()?;
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let mut task = Task::new(&title, (!description.is_empty()).then_some(description.as_str()));
    task.id = Some(id);

    // Explicit ids go through the duplicate-checked add, not the upsert.
    match service.store_mut().add(task) {
        Ok(added) => msg_success!(Message::TaskCreated(added.title)),
        Err(e) => msg_error!(e),
    }
    Ok(())
}

fn handle_find(service: &TaskService<MemoryTaskStore>) -> Result<()> {
    let id: i64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskId.to_string())
        .interact_text()?;

    match service.get_by_id(id) {
        Ok(task) => View::tasks(&[task])?,
        Err(TaskError::NotFound(_)) => msg_error!(Message::TaskNotFoundWithId(id)),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn handle_edit(service: &mut TaskService<MemoryTaskStore>) -> Result<()> {
    let id: i64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskId.to_string())
        .interact_text()?;

    let task = match service.get_by_id(id) {
        Ok(task) => task,
        Err(TaskError::NotFound(_)) => {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    msg_print!(Message::CurrentTaskState, true);
    View::tasks(&[task])?;
    msg_info!(Message::PromptKeepCurrentValue);

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .allow_empty(true)
        .interact_text()?;
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let status_labels: Vec<String> = std::iter::once("(keep)".to_string())
        .chain(TaskStatus::all().iter().map(|s| s.to_string()))
        .collect();
    let status_choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&status_labels)
        .default(0)
        .interact()?;

    let mut patch = TaskPatch::default();
    if !title.is_empty() {
        patch = patch.title(&title);
    }
    if !description.is_empty() {
        patch = patch.description(&description);
    }
    if status_choice > 0 {
        patch = patch.status(TaskStatus::all()[status_choice - 1]);
    }

    let updated = service.update(id, &patch)?;
    msg_success!(Message::TaskUpdated(updated.title));
    Ok(())
}

fn handle_filter(service: &TaskService<MemoryTaskStore>) -> Result<()> {
    let status_labels: Vec<String> = TaskStatus::all().iter().map(|s| s.to_string()).collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&status_labels)
        .default(0)
        .interact()?;
    let status = TaskStatus::all()[choice];

    let tasks = service.list_by_status(status)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksWithStatus(status.to_string()));
        return Ok(());
    }

    msg_print!(Message::TasksWithStatusHeader(status.to_string()), true);
    View::tasks(&tasks)?;
    Ok(())
}

fn handle_delete(service: &mut TaskService<MemoryTaskStore>) -> Result<()> {
    let id: i64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskId.to_string())
        .interact_text()?;

    let task = match service.get_by_id(id) {
        Ok(task) => task,
        Err(TaskError::NotFound(_)) => {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    service.delete(id)?;
    msg_success!(Message::TaskDeleted(id));
    Ok(())
}

fn handle_json(service: &TaskService<MemoryTaskStore>) -> Result<()> {
    let tasks = service.list()?;
    println!("{}", serde_json::to_string_pretty(&tasks)?);
    Ok(())
}
