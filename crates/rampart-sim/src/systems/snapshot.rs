//! Snapshot system: queries the ECS world and builds a complete FrameSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use rampart_core::components::*;
use rampart_core::enums::*;
use rampart_core::events::SimEvent;
use rampart_core::state::*;
use rampart_core::types::{Path, Position, SimTime};

use crate::economy::Ledger;
use crate::systems::combat::TargetLock;
use crate::systems::wave_director::WaveState;

/// Session-level values the snapshot needs besides the world.
pub struct SessionView<'a> {
    pub time: SimTime,
    pub terminal: Terminal,
    pub selected_tower: TowerType,
    pub ledger: &'a Ledger,
    pub wave: &'a WaveState,
    pub path: &'a Path,
}

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    session: SessionView<'_>,
    events: Vec<SimEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: session.time,
        terminal: session.terminal,
        selected_tower: session.selected_tower,
        summary: SummaryView {
            money: session.ledger.money,
            lives: session.ledger.lives,
            score: session.ledger.score,
            wave: session.wave.wave_number,
            spawned: session.wave.spawned_count,
            quota: session.wave.quota,
        },
        path: session.path.waypoints().to_vec(),
        enemies: build_enemies(world, session.time.elapsed_ms),
        towers: build_towers(world),
        events,
    }
}

/// Alive enemies, sorted by id.
fn build_enemies(world: &World, now_ms: u64) -> Vec<EnemyView> {
    let mut query = world.query::<(&EnemyId, &Enemy, &Health, &Position, Option<&Slowed>)>();
    let mut enemies: Vec<EnemyView> = query
        .iter()
        .filter(|(_, (_, enemy, _, _, _))| enemy.status.is_alive())
        .map(|(_, (id, enemy, health, pos, slowed))| EnemyView {
            id: *id,
            kind: enemy.kind,
            position: *pos,
            health_fraction: if health.max > 0 {
                f64::from(health.current) / f64::from(health.max)
            } else {
                0.0
            },
            radius: enemy.hitbox_radius,
            slowed: slowed.is_some_and(|slow| now_ms < slow.until_ms),
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

/// All towers, sorted by id. A target is only shown while it is alive.
fn build_towers(world: &World) -> Vec<TowerView> {
    let mut query = world.query::<(&TowerId, &Tower, &Position, &TargetLock)>();
    let mut towers: Vec<TowerView> = query
        .iter()
        .map(|(_, (id, tower, pos, lock))| TowerView {
            id: *id,
            kind: tower.kind,
            position: *pos,
            range: tower.stats.range,
            target: lock.0.and_then(|entity| alive_enemy_id(world, entity)),
        })
        .collect();
    towers.sort_by_key(|t| t.id);
    towers
}

fn alive_enemy_id(world: &World, entity: hecs::Entity) -> Option<EnemyId> {
    let mut query = world.query_one::<(&EnemyId, &Enemy)>(entity).ok()?;
    let (id, enemy) = query.get()?;
    enemy.status.is_alive().then_some(*id)
}
