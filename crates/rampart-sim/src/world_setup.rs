//! Entity spawn factories for the simulation world.
//!
//! Creates enemy and tower entities with the component bundles the
//! systems expect.

use hecs::{Entity, World};

use rampart_core::components::*;
use rampart_core::config::{EnemyStats, TowerStats};
use rampart_core::enums::*;
use rampart_core::types::{Path, Position};

use crate::systems::combat::TargetLock;

/// Spawn an enemy at the start of the path with full health.
pub fn spawn_enemy(
    world: &mut World,
    id: EnemyId,
    kind: EnemyType,
    stats: &EnemyStats,
    path: &Path,
) -> Entity {
    spawn_enemy_at(world, id, kind, stats, path.start(), 0)
}

/// Spawn an enemy mid-route. `path_index` is the last waypoint it has reached.
pub fn spawn_enemy_at(
    world: &mut World,
    id: EnemyId,
    kind: EnemyType,
    stats: &EnemyStats,
    position: Position,
    path_index: usize,
) -> Entity {
    let enemy = Enemy {
        kind,
        status: EnemyStatus::Alive,
        speed: stats.speed,
        reward: stats.reward,
        hitbox_radius: stats.hitbox_radius,
    };
    let health = Health {
        current: stats.max_hp,
        max: stats.max_hp,
    };

    world.spawn((
        id,
        enemy,
        health,
        position,
        PathProgress { index: path_index },
    ))
}

/// Spawn a tower that has never fired and has no target.
pub fn spawn_tower(
    world: &mut World,
    id: TowerId,
    kind: TowerType,
    stats: TowerStats,
    position: Position,
) -> Entity {
    world.spawn((
        id,
        Tower {
            kind,
            stats,
            last_fired_ms: None,
        },
        position,
        TargetLock::default(),
    ))
}
