//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype. Each maps to an immutable stat record in `RulesConfig`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyType {
    #[default]
    Basic,
    Fast,
    Tank,
    Flying,
    Boss,
}

impl EnemyType {
    pub const ALL: [EnemyType; 5] = [
        EnemyType::Basic,
        EnemyType::Fast,
        EnemyType::Tank,
        EnemyType::Flying,
        EnemyType::Boss,
    ];
}

/// Tower archetype. Each maps to an immutable stat record in `RulesConfig`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerType {
    #[default]
    Basic,
    Sniper,
    Freeze,
    Explosive,
    Laser,
}

impl TowerType {
    pub const ALL: [TowerType; 5] = [
        TowerType::Basic,
        TowerType::Sniper,
        TowerType::Freeze,
        TowerType::Explosive,
        TowerType::Laser,
    ];
}

/// Enemy lifecycle. `Defeated` and `Escaped` are terminal and mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyStatus {
    #[default]
    Alive,
    /// Health reached zero.
    Defeated,
    /// Reached the final waypoint.
    Escaped,
}

impl EnemyStatus {
    pub fn is_alive(self) -> bool {
        self == EnemyStatus::Alive
    }
}

/// Session outcome. One-way: once `Lost` or `Won`, only a reset returns to `Playing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terminal {
    #[default]
    Playing,
    Lost,
    Won,
}

impl Terminal {
    pub fn is_over(self) -> bool {
        self != Terminal::Playing
    }
}
