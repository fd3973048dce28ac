//! Events emitted by the simulation for UI feedback and telemetry.

use serde::{Deserialize, Serialize};

use crate::components::{EnemyId, TowerId};
use crate::enums::*;
use crate::errors::PlacementError;
use crate::types::Position;

/// Something that happened during the last tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    EnemySpawned {
        enemy: EnemyId,
        kind: EnemyType,
        wave: u32,
    },
    /// A tower shot. `splash_hits` counts secondary victims.
    ShotFired {
        tower: TowerId,
        target: EnemyId,
        splash_hits: u32,
    },
    EnemyDefeated {
        enemy: EnemyId,
        reward: i64,
    },
    EnemyEscaped {
        enemy: EnemyId,
        lives_left: i32,
    },
    TowerPlaced {
        tower: TowerId,
        kind: TowerType,
        position: Position,
        cost: i64,
    },
    PlacementRejected {
        kind: TowerType,
        position: Position,
        reason: PlacementError,
    },
    WaveCompleted {
        wave: u32,
        next_quota: u32,
    },
    GameLost {
        wave: u32,
        score: i64,
    },
    GameWon {
        score: i64,
    },
    SessionReset,
}
