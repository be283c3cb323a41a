//! Comma-separated campus data files
//!
//! Buildings: `shortName,longName,x,y`
//! Paths: `x1,y1,x2,y2,distance`
//!
//! The first non-blank line of each file is a header and is skipped.
//! Long names may contain commas; the first and last two fields are
//! positional and everything between is the long name.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, WaygraphError};
use crate::graph::Cost;

use super::types::{Building, CampusPath, Point};

/// Iterate the data lines of `content` with 1-based line numbers
fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .skip(1)
}

fn parse_coordinate(source: &str, line: usize, field: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        WaygraphError::invalid_record(source, line, format!("{field} is not a number: '{raw}'"))
    })?;
    if !value.is_finite() {
        return Err(WaygraphError::invalid_record(
            source,
            line,
            format!("{field} is not finite: '{raw}'"),
        ));
    }
    Ok(value)
}

fn unquote(field: &str) -> &str {
    let field = field.trim();
    field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .unwrap_or(field)
}

/// Parse building records. Short names must be unique.
pub fn parse_buildings(content: &str, source: &str) -> Result<Vec<Building>> {
    let mut seen = HashSet::new();
    let mut buildings = Vec::new();

    for (line, text) in data_lines(content) {
        let fields: Vec<&str> = text.split(',').collect();
        if fields.len() < 4 {
            return Err(WaygraphError::invalid_record(
                source,
                line,
                format!("expected 4 fields, found {}", fields.len()),
            ));
        }

        let short_name = unquote(fields[0]).to_string();
        if short_name.is_empty() {
            return Err(WaygraphError::invalid_record(
                source,
                line,
                "empty short name",
            ));
        }
        if !seen.insert(short_name.clone()) {
            return Err(WaygraphError::invalid_record(
                source,
                line,
                format!("duplicate building '{short_name}'"),
            ));
        }

        let n = fields.len();
        let long_name = unquote(&fields[1..n - 2].join(",")).to_string();
        let x = parse_coordinate(source, line, "x", fields[n - 2])?;
        let y = parse_coordinate(source, line, "y", fields[n - 1])?;

        buildings.push(Building {
            short_name,
            long_name,
            location: Point::new(x, y),
        });
    }

    Ok(buildings)
}

/// Parse path records. Distances must be non-negative.
pub fn parse_paths(content: &str, source: &str) -> Result<Vec<CampusPath>> {
    let mut paths = Vec::new();

    for (line, text) in data_lines(content) {
        let fields: Vec<&str> = text.split(',').collect();
        if fields.len() != 5 {
            return Err(WaygraphError::invalid_record(
                source,
                line,
                format!("expected 5 fields, found {}", fields.len()),
            ));
        }

        let x1 = parse_coordinate(source, line, "x1", fields[0])?;
        let y1 = parse_coordinate(source, line, "y1", fields[1])?;
        let x2 = parse_coordinate(source, line, "x2", fields[2])?;
        let y2 = parse_coordinate(source, line, "y2", fields[3])?;
        let distance = parse_coordinate(source, line, "distance", fields[4])?;
        let distance = Cost::new(distance)
            .map_err(|e| WaygraphError::invalid_record(source, line, e))?;

        paths.push(CampusPath {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
            distance,
        });
    }

    Ok(paths)
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| WaygraphError::io_operation("read", path.display(), e))
}

/// Read and parse a buildings file
pub fn load_buildings(path: &Path) -> Result<Vec<Building>> {
    let content = read_source(path)?;
    parse_buildings(&content, &path.display().to_string())
}

/// Read and parse a paths file
pub fn load_paths(path: &Path) -> Result<Vec<CampusPath>> {
    let content = read_source(path)?;
    parse_paths(&content, &path.display().to_string())
}
