//! `waygraph campus` commands

use std::path::PathBuf;

use waygraph_core::campus::{CampusMap, Route};
use waygraph_core::error::{Result, WaygraphError};

use crate::cli::{CampusCommands, CampusSubcommand, OutputFormat};
use crate::commands::dispatch::command::CommandContext;

pub fn execute(ctx: &CommandContext, subcmd: &CampusSubcommand) -> Result<()> {
    let buildings = data_file(
        subcmd.buildings.as_ref(),
        ctx.config.campus.buildings.as_ref(),
        "buildings",
    )?;
    let paths = data_file(subcmd.paths.as_ref(), ctx.config.campus.paths.as_ref(), "paths")?;
    let map = CampusMap::load(&buildings, &paths)?;

    match &subcmd.command {
        CampusCommands::Buildings => list_buildings(ctx, &map),
        CampusCommands::Route { start, end } => {
            let route = map.route(start, end)?;
            print_route(ctx, &route)
        }
    }
}

/// Command-line flag first, then the configured file
fn data_file(flag: Option<&PathBuf>, configured: Option<&PathBuf>, kind: &str) -> Result<PathBuf> {
    flag.or(configured).cloned().ok_or_else(|| {
        WaygraphError::UsageError(format!(
            "no {kind} file given; pass --{kind} or set [campus] {kind} in waygraph.toml"
        ))
    })
}

fn list_buildings(ctx: &CommandContext, map: &CampusMap) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            let buildings: Vec<_> = map.buildings().collect();
            println!("{}", serde_json::to_string_pretty(&buildings)?);
        }
        OutputFormat::Human => {
            for (short, long) in map.building_names() {
                println!("{short}: {long}");
            }
        }
    }
    Ok(())
}

fn print_route(ctx: &CommandContext, route: &Route) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(route)?);
        }
        OutputFormat::Human => {
            println!(
                "path from {} to {}:",
                route.start.short_name, route.end.short_name
            );
            match &route.path {
                Some(path) => {
                    for line in path.render_lines(ctx.precision()) {
                        println!("{line}");
                    }
                }
                None => println!("no path found"),
            }
        }
    }
    Ok(())
}
