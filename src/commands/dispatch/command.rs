//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use waygraph_core::config::WaygraphConfig;
use waygraph_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a WaygraphConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a WaygraphConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Decimal places for costs in human output
    pub fn precision(&self) -> usize {
        self.config.output.precision
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("waygraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest routes and dependency ordering over directed graphs.");
        println!();
        println!("Run `waygraph --help` for usage information.");
        Ok(())
    }
}
