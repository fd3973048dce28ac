//! Wave director: schedules spawns, picks enemy types and detects wave completion.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use rampart_core::components::{Enemy, EnemyId};
use rampart_core::config::RulesConfig;
use rampart_core::enums::EnemyType;
use rampart_core::events::SimEvent;
use rampart_core::types::Path;

use crate::world_setup;

/// Progress through the current wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveState {
    pub wave_number: u32,
    /// Never exceeds `quota`.
    pub spawned_count: u32,
    pub quota: u32,
    /// Time of the last spawn, or of the session start before the first one.
    pub last_spawn_ms: u64,
}

/// What the completion check decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveOutcome {
    InProgress,
    /// The next wave has started.
    Advanced { completed: u32, next_quota: u32 },
    /// The final wave is done; no new wave was started.
    Victory,
}

impl WaveState {
    /// Wave 1 with its quota, first spawn due one spawn delay after `now_ms`.
    pub fn first(rules: &RulesConfig, now_ms: u64) -> Self {
        Self {
            wave_number: 1,
            spawned_count: 0,
            quota: rules.quota_for(1),
            last_spawn_ms: now_ms,
        }
    }

    pub fn spawn_due(&self, rules: &RulesConfig, now_ms: u64) -> bool {
        self.spawned_count < self.quota
            && now_ms.saturating_sub(self.last_spawn_ms) >= rules.spawn_delay_ms
    }
}

const OPENING_POOL: &[EnemyType] = &[EnemyType::Basic];
const SKIRMISH_POOL: &[EnemyType] = &[EnemyType::Basic, EnemyType::Fast];
const ASSAULT_POOL: &[EnemyType] = &[EnemyType::Basic, EnemyType::Fast, EnemyType::Tank];
const FULL_POOL: &[EnemyType] = &EnemyType::ALL;

/// Enemy pool for a wave number. Types are drawn uniformly from the pool.
pub fn enemy_pool(wave_number: u32) -> &'static [EnemyType] {
    match wave_number {
        0..=3 => OPENING_POOL,
        4..=6 => SKIRMISH_POOL,
        7..=10 => ASSAULT_POOL,
        _ => FULL_POOL,
    }
}

pub fn pick_enemy_type(wave_number: u32, rng: &mut ChaCha8Rng) -> EnemyType {
    let pool = enemy_pool(wave_number);
    pool[rng.gen_range(0..pool.len())]
}

/// Spawn the next enemy of the wave if the spawn delay has elapsed.
#[allow(clippy::too_many_arguments)]
pub fn maybe_spawn(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: &mut WaveState,
    rules: &RulesConfig,
    path: &Path,
    next_enemy_id: &mut u32,
    now_ms: u64,
    events: &mut Vec<SimEvent>,
) {
    if !wave.spawn_due(rules, now_ms) {
        return;
    }

    let kind = pick_enemy_type(wave.wave_number, rng);
    let id = EnemyId(*next_enemy_id);
    *next_enemy_id += 1;

    world_setup::spawn_enemy(world, id, kind, rules.enemy(kind), path);
    wave.spawned_count += 1;
    wave.last_spawn_ms = now_ms;

    debug!(
        enemy = id.0,
        ?kind,
        wave = wave.wave_number,
        spawned = wave.spawned_count,
        quota = wave.quota,
        "enemy spawned"
    );
    events.push(SimEvent::EnemySpawned {
        enemy: id,
        kind,
        wave: wave.wave_number,
    });
}

/// A wave is complete once its quota is spawned and every enemy has been
/// removed from the world.
pub fn check_wave_complete(
    world: &World,
    wave: &mut WaveState,
    rules: &RulesConfig,
) -> WaveOutcome {
    if wave.spawned_count < wave.quota {
        return WaveOutcome::InProgress;
    }

    let remaining_enemies = {
        let mut query = world.query::<&Enemy>();
        query.iter().count()
    };
    if remaining_enemies > 0 {
        return WaveOutcome::InProgress;
    }

    let completed = wave.wave_number;
    wave.wave_number += 1;
    wave.spawned_count = 0;

    if wave.wave_number > rules.final_wave {
        wave.quota = 0;
        return WaveOutcome::Victory;
    }

    wave.quota = rules.quota_for(wave.wave_number);
    WaveOutcome::Advanced {
        completed,
        next_quota: wave.quota,
    }
}
