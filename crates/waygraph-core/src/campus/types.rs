//! Campus data types

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::graph::Cost;

/// A location on the campus map, used as a graph node.
///
/// Equality and hashing use the exact bit pattern of the coordinates, so
/// two records refer to the same point only if they agree exactly.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        // normalise -0.0 so equal coordinates hash equally
        Self {
            x: x + 0.0,
            y: y + 0.0,
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A named building and the point its entrance sits on
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Building {
    pub short_name: String,
    pub long_name: String,
    pub location: Point,
}

/// A walkable segment between two points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampusPath {
    pub from: Point,
    pub to: Point,
    pub distance: Cost,
}
