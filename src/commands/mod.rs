pub mod menu;

use crate::libs::service::StatusMerge;
use anyhow::Result;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Always replace a task's status on edit, clearing it when the edit
    /// leaves the status unset (legacy merge behavior)
    #[arg(long)]
    overwrite_status: bool,

    /// Preload the session with a few demo tasks
    #[arg(long)]
    seed: bool,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let policy = if cli.overwrite_status {
            StatusMerge::OverwriteAlways
        } else {
            StatusMerge::PreserveMissing
        };
        menu::run(policy, cli.seed)
    }
}
