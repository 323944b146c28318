use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "archive-task-file")]
#[command(about = "Archive a task/plan file under .vscode/")]
pub struct ArchiveConfig {
    /// Path to the task file
    #[arg(long)]
    pub task: PathBuf,

    /// Workspace root (default: current working directory)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Validate for ArchiveConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("task", &self.task)?;
        validate_path("workspace", &self.workspace)?;
        Ok(())
    }
}
