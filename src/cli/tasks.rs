//! Task subcommands

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum TasksCommands {
    /// Print every task in dependency order
    Sort {
        /// TOML task file
        file: PathBuf,
    },

    /// Show a single task
    Show {
        /// TOML task file
        file: PathBuf,

        /// Task name
        name: String,
    },

    /// List the dependencies that start at a task
    Deps {
        /// TOML task file
        file: PathBuf,

        /// Task name
        name: String,
    },
}
