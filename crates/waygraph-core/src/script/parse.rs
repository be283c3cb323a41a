use crate::bail_usage;
use crate::error::{Result, WaygraphError};
use crate::graph::Cost;

/// One parsed script command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateGraph {
        graph: String,
    },
    AddNode {
        graph: String,
        node: String,
    },
    AddEdge {
        graph: String,
        parent: String,
        child: String,
        cost: Cost,
    },
    ListNodes {
        graph: String,
    },
    ListChildren {
        graph: String,
        parent: String,
    },
    FindPath {
        graph: String,
        from: String,
        to: String,
    },
}

impl Command {
    /// Split a line on whitespace and check the argument count
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens
            .next()
            .ok_or_else(|| WaygraphError::UsageError("empty command".to_string()))?;
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let command = match name {
            "CreateGraph" => {
                let [graph] = expect_args::<1>(name, args)?;
                Command::CreateGraph { graph }
            }
            "AddNode" => {
                let [graph, node] = expect_args::<2>(name, args)?;
                Command::AddNode { graph, node }
            }
            "AddEdge" => {
                let [graph, parent, child, cost] = expect_args::<4>(name, args)?;
                let cost = cost.parse::<Cost>()?;
                Command::AddEdge {
                    graph,
                    parent,
                    child,
                    cost,
                }
            }
            "ListNodes" => {
                let [graph] = expect_args::<1>(name, args)?;
                Command::ListNodes { graph }
            }
            "ListChildren" => {
                let [graph, parent] = expect_args::<2>(name, args)?;
                Command::ListChildren { graph, parent }
            }
            "FindPath" => {
                let [graph, from, to] = expect_args::<3>(name, args)?;
                Command::FindPath { graph, from, to }
            }
            other => bail_usage!(format!("unrecognized command: {other}")),
        };
        Ok(command)
    }
}

fn expect_args<const N: usize>(command: &str, args: Vec<String>) -> Result<[String; N]> {
    args.try_into().map_err(|args: Vec<String>| {
        WaygraphError::UsageError(format!(
            "bad arguments to {command}: expected {N}, found {} [{}]",
            args.len(),
            args.join(", ")
        ))
    })
}
