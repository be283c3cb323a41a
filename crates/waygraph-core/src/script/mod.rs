//! Line-oriented scripts over named cost graphs
//!
//! Each non-blank line that does not start with `#` is a command followed
//! by whitespace-separated arguments:
//!
//! ```text
//! CreateGraph g
//! AddNode g a
//! AddEdge g a b 2.5
//! ListNodes g
//! ListChildren g a
//! FindPath g a b
//! ```
//!
//! Blank lines and comments are echoed unchanged. A command that fails
//! prints one `error:` line and the script carries on.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::error::{Result, WaygraphError};
use crate::graph::{shortest_path, Cost, Graph};

mod parse;

pub use parse::Command;

/// Counts reported once a script has finished
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub commands: usize,
    pub failures: usize,
}

/// Interpreter state: every graph created so far, by name
#[derive(Debug, Default)]
pub struct ScriptRunner {
    graphs: HashMap<String, Graph<String, Cost>>,
    precision: usize,
}

impl ScriptRunner {
    /// Create a runner printing costs with `precision` decimals
    pub fn new(precision: usize) -> Self {
        Self {
            graphs: HashMap::new(),
            precision,
        }
    }

    /// Run every line of `input`, writing results to `output`.
    ///
    /// Only I/O failures end the run early.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> Result<ScriptSummary> {
        let mut summary = ScriptSummary::default();

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with('#') {
                writeln!(output, "{line}")?;
                continue;
            }

            summary.commands += 1;
            match self.execute_line(&line) {
                Ok(lines) => {
                    for text in lines {
                        writeln!(output, "{text}")?;
                    }
                }
                Err(e) => {
                    summary.failures += 1;
                    tracing::debug!(line = %line, error = %e, "script_command_failed");
                    writeln!(output, "error: {e}")?;
                }
            }
        }
        output.flush()?;

        tracing::debug!(
            commands = summary.commands,
            failures = summary.failures,
            "script_complete"
        );
        Ok(summary)
    }

    /// Parse and execute one command line, returning its output lines
    pub fn execute_line(&mut self, line: &str) -> Result<Vec<String>> {
        let command = Command::parse(line)?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<Vec<String>> {
        match command {
            Command::CreateGraph { graph } => {
                let line = format!("created graph {graph}");
                self.graphs.insert(graph, Graph::new());
                Ok(vec![line])
            }
            Command::AddNode { graph, node } => {
                let line = format!("added node {node} to {graph}");
                self.graph_mut(&graph)?.add_node(node);
                Ok(vec![line])
            }
            Command::AddEdge {
                graph,
                parent,
                child,
                cost,
            } => {
                self.graph_mut(&graph)?.add_edge(&parent, &child, cost)?;
                Ok(vec![format!(
                    "added edge {:.*} from {parent} to {child} in {graph}",
                    self.precision, cost
                )])
            }
            Command::ListNodes { graph } => {
                let mut nodes: Vec<&String> = self.graph(&graph)?.nodes().collect();
                nodes.sort();
                let mut line = format!("{graph} contains:");
                for node in nodes {
                    line.push(' ');
                    line.push_str(node);
                }
                Ok(vec![line])
            }
            Command::ListChildren { graph, parent } => {
                let children = self.graph(&graph)?.children_of(&parent)?;
                let mut edges: Vec<_> = children.iter().collect();
                edges.sort_by(|a, b| a.child().cmp(b.child()).then(a.label().cmp(b.label())));
                let mut line = format!("the children of {parent} in {graph} are:");
                for edge in edges {
                    line.push_str(&format!(
                        " {}({:.*})",
                        edge.child(),
                        self.precision,
                        edge.label()
                    ));
                }
                Ok(vec![line])
            }
            Command::FindPath { graph, from, to } => self.find_path(&graph, &from, &to),
        }
    }

    fn find_path(&self, name: &str, from: &String, to: &String) -> Result<Vec<String>> {
        let graph = self.graph(name)?;

        let mut unknown = Vec::new();
        if !graph.contains_node(from) {
            unknown.push(format!("unknown: {from}"));
        }
        if to != from && !graph.contains_node(to) {
            unknown.push(format!("unknown: {to}"));
        }
        if !unknown.is_empty() {
            return Ok(unknown);
        }

        let mut lines = vec![format!("path from {from} to {to}:")];
        match shortest_path(graph, from, to)? {
            Some(path) => lines.extend(path.render_lines(self.precision)),
            None => lines.push("no path found".to_string()),
        }
        Ok(lines)
    }

    fn graph(&self, name: &str) -> Result<&Graph<String, Cost>> {
        self.graphs
            .get(name)
            .ok_or_else(|| WaygraphError::unknown_identifiers("graph", [name]))
    }

    fn graph_mut(&mut self, name: &str) -> Result<&mut Graph<String, Cost>> {
        self.graphs
            .get_mut(name)
            .ok_or_else(|| WaygraphError::unknown_identifiers("graph", [name]))
    }
}
