//! Combat resolver: target selection, cooldown gating and per-type effects.
//!
//! Towers are resolved in `TowerId` order against the enemies that are
//! alive at that moment, so a kill by an earlier tower is visible to later
//! ones within the same tick.

use hecs::{Entity, World};
use tracing::debug;

use rampart_core::components::*;
use rampart_core::config::RulesConfig;
use rampart_core::enums::TowerType;
use rampart_core::events::SimEvent;
use rampart_core::types::Position;

use rampart_enemy::fsm::take_damage;

/// A tower's current target. The handle is re-resolved every tick and
/// validated (exists and Alive) on every use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetLock(pub Option<Entity>);

/// Outcome of a successful shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub target: EnemyId,
    /// Secondary enemies damaged by splash.
    pub splash_hits: u32,
}

/// Resolve every tower once.
pub fn run(world: &mut World, rules: &RulesConfig, now_ms: u64, events: &mut Vec<SimEvent>) {
    let mut towers: Vec<(TowerId, Entity)> = {
        let mut query = world.query::<(&TowerId, &Tower)>();
        query.iter().map(|(entity, (id, _))| (*id, entity)).collect()
    };
    towers.sort_unstable_by_key(|&(id, _)| id);

    for (tower_id, tower_entity) in towers {
        let (origin, range) = match tower_origin(world, tower_entity) {
            Some(found) => found,
            None => continue,
        };

        let target = find_target(world, origin, range);
        if let Ok(mut lock) = world.get::<&mut TargetLock>(tower_entity) {
            lock.0 = target;
        }

        if let Some(shot) = fire(world, tower_entity, rules, now_ms) {
            debug!(
                tower = tower_id.0,
                target = shot.target.0,
                splash_hits = shot.splash_hits,
                "tower fired"
            );
            events.push(SimEvent::ShotFired {
                tower: tower_id,
                target: shot.target,
                splash_hits: shot.splash_hits,
            });
        }
    }
}

fn tower_origin(world: &World, tower: Entity) -> Option<(Position, f64)> {
    let mut query = world.query_one::<(&Tower, &Position)>(tower).ok()?;
    query.get().map(|(t, pos)| (*pos, t.stats.range))
}

/// Nearest alive enemy within `range` of `origin`.
///
/// Equal distances resolve to the lower `EnemyId`, so the choice does not
/// depend on ECS iteration order.
pub fn find_target(world: &World, origin: Position, range: f64) -> Option<Entity> {
    let mut query = world.query::<(&EnemyId, &Enemy, &Position)>();
    query
        .iter()
        .filter(|(_, (_, enemy, _))| enemy.status.is_alive())
        .map(|(entity, (id, _, pos))| (entity, *id, origin.distance_to(pos)))
        .filter(|&(_, _, distance)| distance <= range)
        .min_by(|a, b| a.2.total_cmp(&b.2).then(a.1.cmp(&b.1)))
        .map(|(entity, _, _)| entity)
}

/// True iff the tower has never fired or its fire interval has elapsed.
pub fn can_fire(tower: &Tower, now_ms: u64) -> bool {
    match tower.last_fired_ms {
        None => true,
        Some(last) => now_ms.saturating_sub(last) >= tower.stats.fire_interval_ms,
    }
}

/// Fire at the locked target if it is still alive and the cooldown allows.
///
/// Returns `None` without touching any state when the shot is not taken.
pub fn fire(world: &mut World, tower: Entity, rules: &RulesConfig, now_ms: u64) -> Option<Shot> {
    let target = world.get::<&TargetLock>(tower).ok()?.0?;
    let target_id = match world.query_one_mut::<(&EnemyId, &Enemy)>(target) {
        Ok((id, enemy)) if enemy.status.is_alive() => *id,
        _ => return None,
    };

    let (kind, damage) = {
        let mut state = world.get::<&mut Tower>(tower).ok()?;
        if !can_fire(&state, now_ms) {
            return None;
        }
        state.last_fired_ms = Some(now_ms);
        (state.kind, state.stats.damage)
    };

    let splash_hits = apply_effect(world, kind, damage, target, rules, now_ms);
    Some(Shot {
        target: target_id,
        splash_hits,
    })
}

/// Apply the tower type's effect to `target`. Returns the number of splash victims.
fn apply_effect(
    world: &mut World,
    kind: TowerType,
    damage: i32,
    target: Entity,
    rules: &RulesConfig,
    now_ms: u64,
) -> u32 {
    // Splash is centred where the target stood when the shot was taken.
    let impact = world.get::<&Position>(target).ok().map(|pos| *pos);

    let defeated = damage_enemy(world, target, damage);

    match kind {
        TowerType::Basic | TowerType::Sniper | TowerType::Laser => 0,
        TowerType::Freeze => {
            if !defeated {
                let slow = Slowed {
                    factor: rules.freeze_slow_factor,
                    until_ms: now_ms.saturating_add(rules.freeze_slow_ms),
                };
                let _ = world.insert_one(target, slow);
            }
            0
        }
        TowerType::Explosive => match impact {
            Some(center) => splash(world, target, center, rules.splash_damage(damage), rules),
            None => 0,
        },
    }
}

fn splash(
    world: &mut World,
    primary: Entity,
    center: Position,
    amount: i32,
    rules: &RulesConfig,
) -> u32 {
    let mut victims: Vec<(EnemyId, Entity)> = {
        let mut query = world.query::<(&EnemyId, &Enemy, &Position)>();
        query
            .iter()
            .filter(|&(entity, (_, enemy, pos))| {
                entity != primary
                    && enemy.status.is_alive()
                    && center.distance_to(pos) <= rules.splash_radius
            })
            .map(|(entity, (id, _, _))| (*id, entity))
            .collect()
    };
    victims.sort_unstable_by_key(|&(id, _)| id);

    for &(_, entity) in &victims {
        damage_enemy(world, entity, amount);
    }
    victims.len() as u32
}

/// Returns true if this hit defeated the enemy.
fn damage_enemy(world: &mut World, enemy: Entity, amount: i32) -> bool {
    match world.query_one_mut::<(&mut Health, &mut Enemy)>(enemy) {
        Ok((health, state)) => take_damage(health, &mut state.status, amount),
        Err(_) => false,
    }
}
