//! Movement system: steps every alive enemy along the shared path.
//!
//! Delegates the waypoint state machine to `rampart_enemy::fsm`.

use hecs::{Entity, World};
use tracing::debug;

use rampart_core::components::{Enemy, EnemyId, PathProgress, Slowed};
use rampart_core::config::RulesConfig;
use rampart_core::constants::DT;
use rampart_core::types::{Path, Position};

use rampart_enemy::fsm::{advance, effective_speed, MoveContext};

/// Move all alive enemies one tick. Escapes are flagged here and settled by cleanup.
pub fn run(world: &mut World, path: &Path, rules: &RulesConfig, now_ms: u64) {
    let mut expired_slows: Vec<Entity> = Vec::new();

    for (entity, (id, enemy, pos, progress, slowed)) in world.query_mut::<(
        &EnemyId,
        &mut Enemy,
        &mut Position,
        &mut PathProgress,
        Option<&Slowed>,
    )>() {
        if let Some(slow) = slowed {
            if now_ms >= slow.until_ms {
                expired_slows.push(entity);
            }
        }

        if !enemy.status.is_alive() {
            continue;
        }

        let ctx = MoveContext {
            status: enemy.status,
            position: *pos,
            path_index: progress.index,
            speed: effective_speed(enemy.speed, slowed, now_ms),
            dt: DT,
            proximity: rules.waypoint_proximity,
            path,
        };

        let update = advance(&ctx);
        *pos = update.position;
        progress.index = update.path_index;
        if update.status_changed {
            enemy.status = update.status;
            debug!(enemy = id.0, status = ?enemy.status, "enemy reached end of path");
        }
    }

    for entity in expired_slows {
        let _ = world.remove_one::<Slowed>(entity);
    }
}
