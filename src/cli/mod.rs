//! CLI argument parsing for waygraph
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config

pub mod args;
pub mod campus;
pub mod output;
pub mod tasks;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CampusSubcommand, ScriptArgs, TasksSubcommand};
pub use campus::CampusCommands;
pub use output::OutputFormat;
pub use tasks::TasksCommands;

/// Waygraph - graph routing and dependency ordering CLI
#[derive(Parser, Debug)]
#[command(name = "waygraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: $WAYGRAPH_CONFIG, then ./waygraph.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a graph script (reads stdin when FILE is omitted)
    Script(ScriptArgs),

    /// Campus buildings and walking routes
    Campus(CampusSubcommand),

    /// Order tasks by their dependencies
    Tasks(TasksSubcommand),
}
