//! Frame snapshot: the complete drawable state handed to a renderer after each tick.

use serde::{Deserialize, Serialize};

use crate::components::{EnemyId, TowerId};
use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

/// Read-only view of the session after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub terminal: Terminal,
    pub selected_tower: TowerType,
    pub summary: SummaryView,
    pub path: Vec<Position>,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub events: Vec<SimEvent>,
}

/// Economy and progression counters for the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryView {
    pub money: i64,
    pub lives: i32,
    pub score: i64,
    pub wave: u32,
    /// Enemies spawned so far in the current wave.
    pub spawned: u32,
    /// Enemies the current wave will spawn in total.
    pub quota: u32,
}

/// A live enemy on the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    /// Also serves as the colour key.
    pub kind: EnemyType,
    pub position: Position,
    /// current / max hit points, 0.0..=1.0.
    pub health_fraction: f64,
    pub radius: f64,
    pub slowed: bool,
}

/// A placed tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub id: TowerId,
    /// Also serves as the colour key.
    pub kind: TowerType,
    pub position: Position,
    pub range: f64,
    /// Enemy locked this tick, if any.
    pub target: Option<EnemyId>,
}
