//! Planar geometry helpers used for coverage checks.
//!
//! All functions are pure. Distances are Euclidean in the same (unitless) world
//! coordinates used for tower and user positions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// A point in the simulation plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rejects NaN and infinite coordinates.
    pub fn validate(&self) -> Result<()> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidInput(format!("Position {} must have finite coordinates", self)))
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Position::new(x, y)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: &Position, b: &Position) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Inclusive range check: a user exactly on the boundary is covered.
pub fn in_range(user_pos: &Position, tower_pos: &Position, radius: f64) -> bool {
    distance(user_pos, tower_pos) <= radius
}

/// Strict overlap check: circles that only touch do not overlap.
pub fn overlaps(pos1: &Position, r1: f64, pos2: &Position, r2: f64) -> bool {
    distance(pos1, pos2) < r1 + r2
}
