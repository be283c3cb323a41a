//! `waygraph script`

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde_json::json;
use waygraph_core::error::{Result, WaygraphError};
use waygraph_core::script::ScriptRunner;

use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;

/// Run a script from `file`, or stdin when no file is given
pub fn execute(ctx: &CommandContext, file: Option<&Path>) -> Result<()> {
    let input: Box<dyn Read> = match file {
        Some(path) => Box::new(
            File::open(path).map_err(|e| WaygraphError::io_operation("open", path.display(), e))?,
        ),
        None => Box::new(io::stdin()),
    };
    let input = BufReader::new(input);
    let mut runner = ScriptRunner::new(ctx.precision());

    match ctx.cli.format {
        OutputFormat::Human => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            runner.run(input, &mut out)?;
        }
        OutputFormat::Json => {
            let mut buffer = Vec::new();
            let summary = runner.run(input, &mut buffer)?;
            let output = String::from_utf8_lossy(&buffer);
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "commands": summary.commands,
                    "failures": summary.failures,
                    "output": output.lines().collect::<Vec<_>>(),
                }))?
            );
        }
    }
    Ok(())
}
