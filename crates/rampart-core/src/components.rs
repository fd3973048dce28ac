//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems and in the enemy state machine, not here.

use serde::{Deserialize, Serialize};

use crate::config::TowerStats;
use crate::enums::*;

/// Stable, session-unique enemy number, assigned in spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

/// Stable, session-unique tower number, assigned in placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TowerId(pub u32);

/// Type-derived enemy state. Stats are copied from the table at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyType,
    pub status: EnemyStatus,
    /// Base speed in units per second.
    pub speed: f64,
    pub reward: i64,
    pub hitbox_radius: f64,
}

/// Hit points. `current` stays within `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Progress along the shared path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathProgress {
    /// Index of the last waypoint reached; the enemy heads for `index + 1`.
    pub index: usize,
}

/// Movement debuff applied by freeze towers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slowed {
    /// Speed multiplier while active.
    pub factor: f64,
    /// Simulation time (ms) at which the slow wears off.
    pub until_ms: u64,
}

/// A placed tower. Towers are never removed once placed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower {
    pub kind: TowerType,
    pub stats: TowerStats,
    /// Time of the last successful shot; `None` until the first one.
    pub last_fired_ms: Option<u64>,
}
