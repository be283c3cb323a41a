use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaygraphError};

/// Additive, finite, non-negative cost carried on a search edge.
///
/// Unlike a bare `f64`, a `Cost` has total ordering, equality and hashing
/// (by bit pattern), so it can live inside an adjacency set and order a
/// priority queue.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    /// Create a cost, rejecting negative, NaN and infinite values
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(WaygraphError::invalid_value("cost", value));
        }
        // normalise -0.0 so equal costs hash equally
        Ok(Cost(value + 0.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Cost {}

impl Hash for Cost {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl std::ops::Sub for Cost {
    type Output = Self;

    /// Difference of two accumulated costs, clamped at zero
    fn sub(self, other: Self) -> Self {
        Cost((self.0 - other.0).max(0.0))
    }
}

impl std::iter::Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, |acc, c| acc + c)
    }
}

impl From<u32> for Cost {
    fn from(units: u32) -> Self {
        Cost(units as f64)
    }
}

impl TryFrom<f64> for Cost {
    type Error = WaygraphError;

    fn try_from(value: f64) -> Result<Self> {
        Cost::new(value)
    }
}

impl FromStr for Cost {
    type Err = WaygraphError;

    fn from_str(s: &str) -> Result<Self> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| WaygraphError::invalid_value("cost", s))?;
        Cost::new(value)
    }
}

impl<'de> Deserialize<'de> for Cost {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Cost::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
