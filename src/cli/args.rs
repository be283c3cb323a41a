//! Argument structures for the top-level commands

use std::path::PathBuf;

use clap::Args;

use crate::cli::campus::CampusCommands;
use crate::cli::tasks::TasksCommands;

#[derive(Args, Debug)]
pub struct ScriptArgs {
    /// Script file
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CampusSubcommand {
    /// Buildings data file (overrides [campus] buildings)
    #[arg(long, global = true)]
    pub buildings: Option<PathBuf>,

    /// Paths data file (overrides [campus] paths)
    #[arg(long, global = true)]
    pub paths: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CampusCommands,
}

#[derive(Args, Debug)]
pub struct TasksSubcommand {
    #[command(subcommand)]
    pub command: TasksCommands,
}
