//! Cleanup system: reconciles enemies that left the Alive state and removes them.
//!
//! Runs after movement and before combat so the combat resolver only ever
//! sees alive enemies plus any it defeats itself this tick.

use hecs::{Entity, World};
use tracing::debug;

use rampart_core::components::{Enemy, EnemyId};
use rampart_core::events::SimEvent;

use crate::economy::{Ledger, Reconciled};

/// Settle every defeated or escaped enemy against the ledger, then despawn it.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    ledger: &mut Ledger,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();

    let mut finished: Vec<(EnemyId, Entity, Enemy)> = {
        let mut query = world.query::<(&EnemyId, &Enemy)>();
        query
            .iter()
            .filter(|(_, (_, enemy))| !enemy.status.is_alive())
            .map(|(entity, (id, enemy))| (*id, entity, *enemy))
            .collect()
    };
    finished.sort_unstable_by_key(|&(id, _, _)| id);

    for (id, entity, enemy) in finished {
        match ledger.reconcile(enemy.status, enemy.reward) {
            Reconciled::Defeated { reward } => {
                debug!(enemy = id.0, reward, money = ledger.money, "enemy defeated");
                events.push(SimEvent::EnemyDefeated { enemy: id, reward });
            }
            Reconciled::Escaped { lives_left } => {
                debug!(enemy = id.0, lives_left, "enemy escaped");
                events.push(SimEvent::EnemyEscaped {
                    enemy: id,
                    lives_left,
                });
            }
            Reconciled::Ignored => continue,
        }
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
