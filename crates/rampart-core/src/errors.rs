//! Error types for rules validation, path construction and tower placement.
//!
//! Gameplay rejections are values, not faults: the engine leaves state
//! untouched and hands one of these back to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a waypoint list cannot become a `Path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path needs at least two waypoints, got {len}")]
    TooShort { len: usize },
    #[error("waypoint {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Reasons a tower placement is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Error)]
#[serde(tag = "type")]
pub enum PlacementError {
    #[error("insufficient funds: tower costs {cost}, have {available}")]
    InsufficientFunds { cost: i64, available: i64 },
    #[error("position blocked: existing tower {nearest:.1} units away")]
    PositionBlocked { nearest: f64 },
    #[error("position lies on the enemy lane")]
    OnPath,
    #[error("position is outside the play field")]
    OutOfBounds,
    #[error("session is over; restart to place towers")]
    SessionOver,
}

/// Rule values a session cannot run with.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RulesError {
    #[error("play field must have a positive finite size, got {width} x {height}")]
    FieldSize { width: f64, height: f64 },
    #[error("waypoint proximity must be positive and finite, got {0}")]
    WaypointProximity(f64),
    #[error("{name} must be a non-negative finite distance, got {value}")]
    Clearance { name: &'static str, value: f64 },
    #[error("final wave must be at least 1")]
    NoWaves,
    #[error("{name} must lie in 0..=1, got {value}")]
    Fraction { name: &'static str, value: f64 },
}
