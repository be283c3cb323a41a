//! Command implementations for all waygraph commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::dispatch::macros::trace_command;
use waygraph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Script(args) => commands::script::execute(ctx, args.file.as_deref())?,
            Commands::Campus(subcmd) => commands::campus::execute(ctx, subcmd)?,
            Commands::Tasks(subcmd) => commands::tasks::execute(ctx, &subcmd.command)?,
        }
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }
}
