//! Player intents delivered by an input source.
//!
//! Intents are queued and processed at the next tick boundary; they never
//! touch simulation state directly.

use serde::{Deserialize, Serialize};

use crate::enums::TowerType;

/// All discrete user intents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Intent {
    /// Choose which tower type subsequent placements use.
    SelectTowerType { kind: TowerType },
    /// Place the selected tower type at a play-field position.
    PlaceTowerAt { x: f64, y: f64 },
    /// Start a fresh session. Only honored once the current one is over.
    Restart,
    /// Stop the game loop.
    Quit,
}
