//! Tasks with before/after dependencies, ordered so that every task comes
//! after the tasks it depends on
//!
//! When several orders are valid, tasks with alphabetically earlier names
//! come first. A cycle of dependencies is reported as
//! `SortOutcome::Cycle`, never as an error.

pub mod file;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{topological_sort_by, Graph, SortOutcome};

/// A unit of work with a name, description and owning team
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    name: String,
    description: String,
    team: String,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            team: team.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn team(&self) -> &str {
        &self.team
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task \"{}\":\nDescription: {}\nTeam: {}",
            self.name, self.description, self.team
        )
    }
}

/// `before` must be finished before `after` can start
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Dependency {
    before: Task,
    after: Task,
}

impl Dependency {
    pub fn new(before: Task, after: Task) -> Self {
        Self { before, after }
    }

    pub fn before(&self) -> &Task {
        &self.before
    }

    pub fn after(&self) -> &Task {
        &self.after
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dependency: {} -> {}",
            self.before.name(),
            self.after.name()
        )
    }
}

/// Stores tasks and dependencies and orders them
#[derive(Debug, Clone, Default)]
pub struct TaskSorter {
    graph: Graph<Task, Dependency>,
}

impl TaskSorter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task; adding the same task again does nothing
    pub fn add_task(&mut self, task: Task) -> bool {
        self.graph.add_node(task)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.graph.nodes()
    }

    /// Look up a task by name
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.graph.nodes().find(|task| task.name() == name)
    }

    pub fn len(&self) -> usize {
        self.graph.size()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Add a dependency between two previously added tasks.
    ///
    /// Fails with `NodeNotFound` if either task is unknown; adding the same
    /// dependency again does nothing.
    pub fn add_dependency(&mut self, dependency: Dependency) -> Result<bool> {
        let before = dependency.before().clone();
        let after = dependency.after().clone();
        self.graph.add_edge(&before, &after, dependency)
    }

    /// Dependencies that have `task` as their `before` task
    pub fn outgoing_dependencies(&self, task: &Task) -> Result<HashSet<&Dependency>> {
        Ok(self
            .graph
            .children_of(task)?
            .iter()
            .map(|edge| edge.label())
            .collect())
    }

    /// Order all tasks so each follows the tasks it depends on
    pub fn sort_tasks(&self) -> Result<SortOutcome<Task>> {
        topological_sort_by(&self.graph, |a, b| a.name().cmp(b.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaygraphError;

    fn task(name: &str) -> Task {
        Task::new(name, format!("task {name}"), "A")
    }

    fn dep(before: &str, after: &str) -> Dependency {
        Dependency::new(task(before), task(after))
    }

    fn names(outcome: SortOutcome<Task>) -> Vec<String> {
        outcome
            .into_order()
            .expect("expected an ordering")
            .into_iter()
            .map(|t| t.name().to_string())
            .collect()
    }

    fn wikipedia_sorter() -> TaskSorter {
        let mut sorter = TaskSorter::new();
        for name in ["2", "3", "5", "7", "8", "9", "10", "11"] {
            sorter.add_task(task(name));
        }
        for (before, after) in [
            ("11", "2"),
            ("11", "9"),
            ("11", "10"),
            ("5", "11"),
            ("7", "11"),
            ("7", "8"),
            ("8", "9"),
            ("3", "8"),
            ("3", "10"),
        ] {
            sorter.add_dependency(dep(before, after)).unwrap();
        }
        sorter
    }

    #[test]
    fn test_new_sorter_is_empty() {
        let sorter = TaskSorter::new();
        assert!(sorter.is_empty());
        assert_eq!(sorter.sort_tasks().unwrap().into_order(), Some(vec![]));
    }

    #[test]
    fn test_add_task_is_idempotent() {
        let mut sorter = TaskSorter::new();
        assert!(sorter.add_task(task("2")));
        assert!(!sorter.add_task(task("2")));
        assert_eq!(sorter.len(), 1);
        assert_eq!(sorter.task("2"), Some(&task("2")));
        assert!(sorter.task("3").is_none());
    }

    #[test]
    fn test_dependency_requires_known_tasks() {
        let mut sorter = TaskSorter::new();
        sorter.add_task(task("2"));
        let err = sorter.add_dependency(dep("2", "3")).unwrap_err();
        assert!(matches!(err, WaygraphError::NodeNotFound { .. }));
    }

    #[test]
    fn test_outgoing_dependencies() {
        let sorter = wikipedia_sorter();
        let deps = sorter.outgoing_dependencies(&task("11")).unwrap();
        assert_eq!(deps.len(), 3);
        assert!(deps.contains(&dep("11", "9")));
        assert!(sorter.outgoing_dependencies(&task("9")).unwrap().is_empty());
        assert!(sorter.outgoing_dependencies(&task("42")).is_err());
    }

    #[test]
    fn test_duplicate_dependency_is_ignored() {
        let mut sorter = wikipedia_sorter();
        assert!(!sorter.add_dependency(dep("3", "8")).unwrap());
        assert_eq!(sorter.outgoing_dependencies(&task("3")).unwrap().len(), 2);
    }

    #[test]
    fn test_sort_wikipedia_example() {
        let sorter = wikipedia_sorter();
        assert_eq!(
            names(sorter.sort_tasks().unwrap()),
            vec!["3", "5", "7", "11", "10", "2", "8", "9"]
        );
    }

    #[test]
    fn test_sort_reports_cycle() {
        let mut sorter = wikipedia_sorter();
        sorter.add_dependency(dep("9", "7")).unwrap();
        let outcome = sorter.sort_tasks().unwrap();
        assert!(outcome.is_cycle());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Task::new("write", "draft the doc", "docs").to_string(),
            "Task \"write\":\nDescription: draft the doc\nTeam: docs"
        );
        assert_eq!(dep("a", "b").to_string(), "Dependency: a -> b");
    }
}
