use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
                task.title,
                task.description.as_deref().unwrap_or("-"),
                task.status.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
            ]);
        }
        table.printstd();

        Ok(())
    }
}
