//! Tower placement rules.
//!
//! Validation only reads the world; the engine debits and spawns once every
//! rule has passed, so a rejected placement leaves no trace.

use hecs::World;

use rampart_core::components::Tower;
use rampart_core::config::RulesConfig;
use rampart_core::errors::PlacementError;
use rampart_core::types::{Path, Position};

use crate::economy::Ledger;

/// Check a candidate placement against bounds, funds, tower spacing and the lane.
pub fn validate(
    world: &World,
    rules: &RulesConfig,
    path: &Path,
    ledger: &Ledger,
    cost: i64,
    position: Position,
) -> Result<(), PlacementError> {
    if !in_bounds(rules, position) {
        return Err(PlacementError::OutOfBounds);
    }

    ledger.check_funds(cost)?;

    if let Some(nearest) = nearest_tower_distance(world, position) {
        if nearest < rules.tower_clearance {
            return Err(PlacementError::PositionBlocked { nearest });
        }
    }

    if rules.path_clearance > 0.0 && path.distance_to(&position) < rules.path_clearance {
        return Err(PlacementError::OnPath);
    }

    Ok(())
}

/// NaN coordinates are out of bounds.
fn in_bounds(rules: &RulesConfig, position: Position) -> bool {
    (0.0..=rules.field_width).contains(&position.x)
        && (0.0..=rules.field_height).contains(&position.y)
}

/// Distance to the closest existing tower, if any.
pub fn nearest_tower_distance(world: &World, position: Position) -> Option<f64> {
    let mut query = world.query::<(&Tower, &Position)>();
    query
        .iter()
        .map(|(_, (_, pos))| pos.distance_to(&position))
        .min_by(f64::total_cmp)
}
