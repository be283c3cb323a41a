//! Command dispatch logic for waygraph

use std::time::Instant;

use crate::cli::Cli;
use tracing::debug;
use waygraph_core::config::WaygraphConfig;
use waygraph_core::error::Result;

pub mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = WaygraphConfig::discover(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
