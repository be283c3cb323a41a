//! TOML task files
//!
//! ```toml
//! [[task]]
//! name = "design"
//! description = "Sketch the schema"
//! team = "core"
//!
//! [[dependency]]
//! before = "design"
//! after = "build"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, WaygraphError};

use super::{Dependency, Task, TaskSorter};

#[derive(Debug, Deserialize)]
struct TaskFile {
    #[serde(default, rename = "task")]
    tasks: Vec<TaskEntry>,
    #[serde(default, rename = "dependency")]
    dependencies: Vec<DependencyEntry>,
}

#[derive(Debug, Deserialize)]
struct TaskEntry {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    team: String,
}

#[derive(Debug, Deserialize)]
struct DependencyEntry {
    before: String,
    after: String,
}

/// Tasks loaded from a file, with name lookup
#[derive(Debug, Clone)]
pub struct TaskBook {
    sorter: TaskSorter,
    by_name: HashMap<String, Task>,
}

impl TaskBook {
    /// Parse TOML task definitions. `source` names the input in errors.
    ///
    /// Task names must be unique and dependencies must name defined tasks.
    /// Entries are numbered from 1 in the order they appear.
    pub fn parse(content: &str, source: &str) -> Result<Self> {
        let file: TaskFile = toml::from_str(content)?;
        let mut sorter = TaskSorter::new();
        let mut by_name = HashMap::new();

        for (i, entry) in file.tasks.into_iter().enumerate() {
            if by_name.contains_key(&entry.name) {
                return Err(WaygraphError::invalid_record(
                    source,
                    i + 1,
                    format!("duplicate task '{}'", entry.name),
                ));
            }
            let task = Task::new(entry.name.clone(), entry.description, entry.team);
            sorter.add_task(task.clone());
            by_name.insert(entry.name, task);
        }

        for (i, entry) in file.dependencies.into_iter().enumerate() {
            let lookup = |name: &str| {
                by_name.get(name).cloned().ok_or_else(|| {
                    WaygraphError::invalid_record(
                        source,
                        i + 1,
                        format!("dependency names unknown task '{name}'"),
                    )
                })
            };
            let dependency = Dependency::new(lookup(&entry.before)?, lookup(&entry.after)?);
            sorter.add_dependency(dependency)?;
        }

        tracing::debug!(
            tasks = by_name.len(),
            source = source,
            "task_file_parsed"
        );

        Ok(Self { sorter, by_name })
    }

    /// Read and parse a task file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| WaygraphError::io_operation("read", path.display(), e))?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn sorter(&self) -> &TaskSorter {
        &self.sorter
    }

    /// Look up a task by name, failing with `UnknownIdentifiers`
    pub fn task(&self, name: &str) -> Result<&Task> {
        self.by_name
            .get(name)
            .ok_or_else(|| WaygraphError::unknown_identifiers("task", [name]))
    }

    /// Dependencies that have the named task as their `before` task,
    /// ordered by the `after` task's name
    pub fn dependencies_of(&self, name: &str) -> Result<Vec<&Dependency>> {
        let task = self.task(name)?;
        let mut deps: Vec<&Dependency> = self
            .sorter
            .outgoing_dependencies(task)?
            .into_iter()
            .collect();
        deps.sort_by(|a, b| a.after().name().cmp(b.after().name()));
        Ok(deps)
    }
}
