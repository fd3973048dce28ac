//! Enemy finite state machine.
//!
//! Pure functions that compute waypoint progress, movement and damage for
//! enemy entities. No ECS dependency; operates on plain data.
//!
//! States: `Alive → Escaped` when the final waypoint is reached,
//! `Alive → Defeated` when health reaches zero. Both are terminal.

use glam::DVec2;

use rampart_core::components::{Health, Slowed};
use rampart_core::enums::EnemyStatus;
use rampart_core::types::{Path, Position};

/// Input to the movement step for a single enemy.
pub struct MoveContext<'a> {
    pub status: EnemyStatus,
    pub position: Position,
    /// Last waypoint reached.
    pub path_index: usize,
    /// Effective speed in units per second, debuffs already applied.
    pub speed: f64,
    /// Seconds per tick.
    pub dt: f64,
    /// Arrival threshold around a waypoint.
    pub proximity: f64,
    pub path: &'a Path,
}

/// Output from the movement step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveUpdate {
    pub position: Position,
    pub path_index: usize,
    pub status: EnemyStatus,
    pub status_changed: bool,
}

/// Advance one enemy by one tick along the path.
///
/// Within `proximity` of the next waypoint the enemy retargets instead of
/// moving; with no waypoint left it escapes. Non-alive enemies are returned
/// unchanged, which makes arrival idempotent.
pub fn advance(ctx: &MoveContext) -> MoveUpdate {
    let no_change = MoveUpdate {
        position: ctx.position,
        path_index: ctx.path_index,
        status: ctx.status,
        status_changed: false,
    };

    if !ctx.status.is_alive() {
        return no_change;
    }

    let Some(target) = ctx.path.waypoint(ctx.path_index + 1) else {
        return escaped(ctx.position, ctx.path_index);
    };

    let here = DVec2::from(ctx.position);
    let to_target = DVec2::from(target) - here;
    let distance = to_target.length();

    if distance < ctx.proximity || distance == 0.0 {
        let reached = ctx.path_index + 1;
        if ctx.path.waypoint(reached + 1).is_none() {
            return escaped(ctx.position, reached);
        }
        return MoveUpdate {
            path_index: reached,
            ..no_change
        };
    }

    // Never overshoot the waypoint, whatever the configured speed.
    let step = (ctx.speed * ctx.dt).max(0.0).min(distance);
    let moved = here + to_target / distance * step;

    MoveUpdate {
        position: moved.into(),
        ..no_change
    }
}

fn escaped(position: Position, path_index: usize) -> MoveUpdate {
    MoveUpdate {
        position,
        path_index,
        status: EnemyStatus::Escaped,
        status_changed: true,
    }
}

/// Speed after any active slow. Expired slows have no effect.
pub fn effective_speed(base: f64, slowed: Option<&Slowed>, now_ms: u64) -> f64 {
    match slowed {
        Some(slow) if now_ms < slow.until_ms => base * slow.factor,
        _ => base,
    }
}

/// Apply damage to an alive enemy.
///
/// Health saturates at zero and the enemy becomes `Defeated` the instant it
/// gets there. Non-positive amounts and hits on non-alive enemies are
/// ignored. Returns true only for the hit that caused the defeat.
pub fn take_damage(health: &mut Health, status: &mut EnemyStatus, amount: i32) -> bool {
    if amount <= 0 || !status.is_alive() {
        return false;
    }

    health.current = health.current.saturating_sub(amount).max(0);
    if health.current == 0 {
        *status = EnemyStatus::Defeated;
        return true;
    }
    false
}
