//! `waygraph tasks` commands

use std::path::Path;

use serde::Serialize;
use waygraph_core::error::Result;
use waygraph_core::graph::SortOutcome;
use waygraph_core::tasks::file::TaskBook;
use waygraph_core::tasks::Task;

use crate::cli::{OutputFormat, TasksCommands};
use crate::commands::dispatch::command::CommandContext;

const CYCLE_MESSAGE: &str = "Cycle in dependencies, cannot be sorted!";

#[derive(Serialize)]
struct SortReport<'a> {
    sorted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tasks: Option<&'a [Task]>,
}

#[derive(Serialize)]
struct DependencyRecord<'a> {
    before: &'a str,
    after: &'a str,
}

pub fn execute(ctx: &CommandContext, command: &TasksCommands) -> Result<()> {
    match command {
        TasksCommands::Sort { file } => sort(ctx, file),
        TasksCommands::Show { file, name } => show(ctx, file, name),
        TasksCommands::Deps { file, name } => deps(ctx, file, name),
    }
}

fn sort(ctx: &CommandContext, file: &Path) -> Result<()> {
    let book = TaskBook::load(file)?;
    let outcome = book.sorter().sort_tasks()?;

    let order = match &outcome {
        SortOutcome::Sorted { order } => Some(order.as_slice()),
        SortOutcome::Cycle { at } => {
            tracing::debug!(task = at.name(), "dependency_cycle");
            None
        }
    };

    match ctx.cli.format {
        OutputFormat::Json => {
            let report = SortReport {
                sorted: order.is_some(),
                tasks: order,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => match order {
            Some(tasks) => {
                for task in tasks {
                    println!("{task}");
                }
            }
            None => println!("{CYCLE_MESSAGE}"),
        },
    }
    Ok(())
}

fn show(ctx: &CommandContext, file: &Path, name: &str) -> Result<()> {
    let book = TaskBook::load(file)?;
    let task = book.task(name)?;

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(task)?),
        OutputFormat::Human => println!("{task}"),
    }
    Ok(())
}

fn deps(ctx: &CommandContext, file: &Path, name: &str) -> Result<()> {
    let book = TaskBook::load(file)?;
    let dependencies = book.dependencies_of(name)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let records: Vec<DependencyRecord> = dependencies
                .iter()
                .map(|dep| DependencyRecord {
                    before: dep.before().name(),
                    after: dep.after().name(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Human => {
            for dep in dependencies {
                println!("{dep}");
            }
        }
    }
    Ok(())
}
