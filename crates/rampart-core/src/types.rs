//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::errors::PathError;

/// 2D position on the play field (x = right, y = down, screen units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: u64,
}

/// Ordered, immutable waypoint sequence shared by every enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Position>", into = "Vec<Position>")]
pub struct Path {
    waypoints: Vec<Position>,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Position> for DVec2 {
    fn from(p: Position) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Position::new(v.x, v.y)
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick. Elapsed time is derived from the tick count so
    /// it never drifts.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms = self.tick * 1000 / crate::constants::TICK_RATE as u64;
    }
}

impl Path {
    /// Build a path, rejecting fewer than two waypoints or non-finite coordinates.
    pub fn new(waypoints: Vec<Position>) -> Result<Self, PathError> {
        if waypoints.len() < 2 {
            return Err(PathError::TooShort {
                len: waypoints.len(),
            });
        }
        if let Some(index) = waypoints.iter().position(|p| !p.is_finite()) {
            return Err(PathError::NonFinite { index });
        }
        Ok(Self { waypoints })
    }

    /// The authored lane from `constants::DEFAULT_ROUTE`.
    pub fn default_route() -> Self {
        Self {
            waypoints: crate::constants::DEFAULT_ROUTE
                .iter()
                .map(|&(x, y)| Position::new(x, y))
                .collect(),
        }
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    pub fn waypoint(&self, index: usize) -> Option<Position> {
        self.waypoints.get(index).copied()
    }

    pub fn start(&self) -> Position {
        self.waypoints[0]
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always false; a path holds at least two waypoints.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Shortest distance from `point` to any segment of the lane.
    pub fn distance_to(&self, point: &Position) -> f64 {
        let p = DVec2::from(*point);
        self.waypoints
            .windows(2)
            .map(|seg| {
                let a = DVec2::from(seg[0]);
                let b = DVec2::from(seg[1]);
                let ab = b - a;
                let len_sq = ab.length_squared();
                let t = if len_sq > 0.0 {
                    ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                p.distance(a + ab * t)
            })
            .fold(f64::INFINITY, f64::min)
    }
}

impl TryFrom<Vec<Position>> for Path {
    type Error = PathError;

    fn try_from(waypoints: Vec<Position>) -> Result<Self, Self::Error> {
        Path::new(waypoints)
    }
}

impl From<Path> for Vec<Position> {
    fn from(path: Path) -> Self {
        path.waypoints
    }
}
