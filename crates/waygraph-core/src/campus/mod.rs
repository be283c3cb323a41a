//! Campus map: buildings joined by walkable paths
//!
//! Loads building and path records into a `Graph<Point, Cost>` and answers
//! shortest-route queries between buildings named by their short names.

pub mod parser;
pub mod types;

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;

use crate::error::{Result, WaygraphError};
use crate::graph::{shortest_path, Cost, Graph, Path};
use crate::trace_time;

pub use types::{Building, CampusPath, Point};

/// Outcome of a route query between two known buildings
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub start: Building,
    pub end: Building,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Path<Point>>,
}

/// Buildings indexed by short name plus the walkable path graph
#[derive(Debug, Clone)]
pub struct CampusMap {
    buildings: BTreeMap<String, Building>,
    graph: Graph<Point, Cost>,
}

impl CampusMap {
    /// Build the map from parsed records.
    ///
    /// Every path becomes two directed edges of equal cost. Building
    /// locations are nodes even when no path touches them.
    pub fn new(buildings: Vec<Building>, paths: Vec<CampusPath>) -> Result<Self> {
        let mut graph = Graph::new();
        for path in &paths {
            graph.add_node(path.from);
            graph.add_node(path.to);
            graph.add_edge(&path.from, &path.to, path.distance)?;
            graph.add_edge(&path.to, &path.from, path.distance)?;
        }

        let mut by_name = BTreeMap::new();
        for building in buildings {
            graph.add_node(building.location);
            if by_name.contains_key(&building.short_name) {
                return Err(WaygraphError::invalid_value(
                    "building",
                    format!("duplicate short name '{}'", building.short_name),
                ));
            }
            by_name.insert(building.short_name.clone(), building);
        }

        tracing::debug!(
            buildings = by_name.len(),
            points = graph.size(),
            edges = graph.edge_count(),
            "campus_built"
        );

        Ok(Self {
            buildings: by_name,
            graph,
        })
    }

    /// Load buildings and paths from their data files
    #[tracing::instrument(level = "debug", skip_all, fields(buildings = %buildings.display(), paths = %paths.display()))]
    pub fn load(buildings: &std::path::Path, paths: &std::path::Path) -> Result<Self> {
        let start = Instant::now();
        let building_records = parser::load_buildings(buildings)?;
        let path_records = parser::load_paths(paths)?;
        trace_time!(start, "parse_campus", paths = path_records.len());
        Self::new(building_records, path_records)
    }

    pub fn short_name_exists(&self, short_name: &str) -> bool {
        self.buildings.contains_key(short_name)
    }

    pub fn building(&self, short_name: &str) -> Option<&Building> {
        self.buildings.get(short_name)
    }

    pub fn long_name_for_short(&self, short_name: &str) -> Result<&str> {
        self.building(short_name)
            .map(|b| b.long_name.as_str())
            .ok_or_else(|| WaygraphError::unknown_identifiers("building", [short_name]))
    }

    /// Buildings ordered by short name
    pub fn buildings(&self) -> impl Iterator<Item = &Building> {
        self.buildings.values()
    }

    /// Short name to long name, ordered by short name
    pub fn building_names(&self) -> BTreeMap<String, String> {
        self.buildings
            .values()
            .map(|b| (b.short_name.clone(), b.long_name.clone()))
            .collect()
    }

    pub fn graph(&self) -> &Graph<Point, Cost> {
        &self.graph
    }

    /// Resolve both names, reporting every unknown one together
    fn resolve_pair(&self, start: &str, end: &str) -> Result<(&Building, &Building)> {
        let unknown: Vec<&str> = [start, end]
            .into_iter()
            .filter(|name| !self.short_name_exists(name))
            .collect();
        if !unknown.is_empty() {
            return Err(WaygraphError::unknown_identifiers("building", unknown));
        }
        Ok((&self.buildings[start], &self.buildings[end]))
    }

    /// Shortest walking path between two buildings.
    ///
    /// Fails with `UnknownIdentifiers` before searching if either name is
    /// unknown. `Ok(None)` means the buildings are not connected.
    pub fn find_shortest_path(&self, start: &str, end: &str) -> Result<Option<Path<Point>>> {
        let (from, to) = self.resolve_pair(start, end)?;
        shortest_path(&self.graph, &from.location, &to.location)
    }

    /// Like `find_shortest_path`, bundled with the resolved buildings
    pub fn route(&self, start: &str, end: &str) -> Result<Route> {
        let (from, to) = self.resolve_pair(start, end)?;
        let path = shortest_path(&self.graph, &from.location, &to.location)?;
        Ok(Route {
            start: from.clone(),
            end: to.clone(),
            found: path.is_some(),
            path,
        })
    }
}
