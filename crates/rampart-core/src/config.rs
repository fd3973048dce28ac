//! Static rules: per-type stat tables and session tuning.
//!
//! Loaded once when a session is created and never mutated afterwards.
//! Every field falls back to its default, so a rules file may override
//! only the values it cares about.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{EnemyType, TowerType};
use crate::errors::RulesError;

/// Immutable stat record for an enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub max_hp: i32,
    /// Movement speed in units per second.
    pub speed: f64,
    /// Money and score granted when defeated.
    pub reward: i64,
    pub hitbox_radius: f64,
}

/// Immutable stat record for a tower archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerStats {
    pub damage: i32,
    pub range: f64,
    /// Minimum time between consecutive shots (ms).
    pub fire_interval_ms: u64,
    pub cost: i64,
    /// Whether hits also damage enemies around the target.
    pub splash: bool,
}

/// Stat table keyed by enemy archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTable {
    pub basic: EnemyStats,
    pub fast: EnemyStats,
    pub tank: EnemyStats,
    pub flying: EnemyStats,
    pub boss: EnemyStats,
}

/// Stat table keyed by tower archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerTable {
    pub basic: TowerStats,
    pub sniper: TowerStats,
    pub freeze: TowerStats,
    pub explosive: TowerStats,
    pub laser: TowerStats,
}

/// Complete rule set for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub enemies: EnemyTable,
    pub towers: TowerTable,

    // Session
    pub starting_money: i64,
    pub starting_lives: i32,

    // Play field and placement
    pub field_width: f64,
    pub field_height: f64,
    pub tower_clearance: f64,
    /// Zero disables the lane rule.
    pub path_clearance: f64,

    // Movement
    pub waypoint_proximity: f64,

    // Waves
    pub spawn_delay_ms: u64,
    pub wave_quota_base: u32,
    pub wave_quota_growth: u32,
    pub wave_quota_cap: u32,
    pub final_wave: u32,

    // Tower effects
    pub splash_radius: f64,
    pub splash_fraction: f64,
    pub freeze_slow_factor: f64,
    pub freeze_slow_ms: u64,
}

impl EnemyTable {
    pub fn get(&self, kind: EnemyType) -> &EnemyStats {
        match kind {
            EnemyType::Basic => &self.basic,
            EnemyType::Fast => &self.fast,
            EnemyType::Tank => &self.tank,
            EnemyType::Flying => &self.flying,
            EnemyType::Boss => &self.boss,
        }
    }
}

impl TowerTable {
    pub fn get(&self, kind: TowerType) -> &TowerStats {
        match kind {
            TowerType::Basic => &self.basic,
            TowerType::Sniper => &self.sniper,
            TowerType::Freeze => &self.freeze,
            TowerType::Explosive => &self.explosive,
            TowerType::Laser => &self.laser,
        }
    }
}

impl RulesConfig {
    pub fn enemy(&self, kind: EnemyType) -> &EnemyStats {
        self.enemies.get(kind)
    }

    pub fn tower(&self, kind: TowerType) -> &TowerStats {
        self.towers.get(kind)
    }

    /// Number of enemies to spawn in `wave_number`.
    pub fn quota_for(&self, wave_number: u32) -> u32 {
        self.wave_quota_base
            .saturating_add(self.wave_quota_growth.saturating_mul(wave_number))
            .min(self.wave_quota_cap)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), RulesError> {
        let (width, height) = (self.field_width, self.field_height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RulesError::FieldSize { width, height });
        }
        if !(self.waypoint_proximity.is_finite() && self.waypoint_proximity > 0.0) {
            return Err(RulesError::WaypointProximity(self.waypoint_proximity));
        }
        for (name, value) in [
            ("tower clearance", self.tower_clearance),
            ("path clearance", self.path_clearance),
            ("splash radius", self.splash_radius),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(RulesError::Clearance { name, value });
            }
        }
        if self.final_wave == 0 {
            return Err(RulesError::NoWaves);
        }
        for (name, value) in [
            ("splash fraction", self.splash_fraction),
            ("freeze slow factor", self.freeze_slow_factor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(RulesError::Fraction { name, value });
            }
        }
        Ok(())
    }

    /// Secondary splash damage derived from a primary hit.
    pub fn splash_damage(&self, primary: i32) -> i32 {
        (f64::from(primary) * self.splash_fraction).floor() as i32
    }
}

impl Default for EnemyTable {
    fn default() -> Self {
        Self {
            basic: EnemyStats {
                max_hp: BASIC_ENEMY_HP,
                speed: BASIC_ENEMY_SPEED,
                reward: BASIC_ENEMY_REWARD,
                hitbox_radius: BASIC_ENEMY_RADIUS,
            },
            fast: EnemyStats {
                max_hp: FAST_ENEMY_HP,
                speed: FAST_ENEMY_SPEED,
                reward: FAST_ENEMY_REWARD,
                hitbox_radius: FAST_ENEMY_RADIUS,
            },
            tank: EnemyStats {
                max_hp: TANK_ENEMY_HP,
                speed: TANK_ENEMY_SPEED,
                reward: TANK_ENEMY_REWARD,
                hitbox_radius: TANK_ENEMY_RADIUS,
            },
            flying: EnemyStats {
                max_hp: FLYING_ENEMY_HP,
                speed: FLYING_ENEMY_SPEED,
                reward: FLYING_ENEMY_REWARD,
                hitbox_radius: FLYING_ENEMY_RADIUS,
            },
            boss: EnemyStats {
                max_hp: BOSS_ENEMY_HP,
                speed: BOSS_ENEMY_SPEED,
                reward: BOSS_ENEMY_REWARD,
                hitbox_radius: BOSS_ENEMY_RADIUS,
            },
        }
    }
}

impl Default for TowerTable {
    fn default() -> Self {
        Self {
            basic: TowerStats {
                damage: BASIC_TOWER_DAMAGE,
                range: BASIC_TOWER_RANGE,
                fire_interval_ms: BASIC_TOWER_INTERVAL_MS,
                cost: BASIC_TOWER_COST,
                splash: false,
            },
            sniper: TowerStats {
                damage: SNIPER_TOWER_DAMAGE,
                range: SNIPER_TOWER_RANGE,
                fire_interval_ms: SNIPER_TOWER_INTERVAL_MS,
                cost: SNIPER_TOWER_COST,
                splash: false,
            },
            freeze: TowerStats {
                damage: FREEZE_TOWER_DAMAGE,
                range: FREEZE_TOWER_RANGE,
                fire_interval_ms: FREEZE_TOWER_INTERVAL_MS,
                cost: FREEZE_TOWER_COST,
                splash: false,
            },
            explosive: TowerStats {
                damage: EXPLOSIVE_TOWER_DAMAGE,
                range: EXPLOSIVE_TOWER_RANGE,
                fire_interval_ms: EXPLOSIVE_TOWER_INTERVAL_MS,
                cost: EXPLOSIVE_TOWER_COST,
                splash: true,
            },
            laser: TowerStats {
                damage: LASER_TOWER_DAMAGE,
                range: LASER_TOWER_RANGE,
                fire_interval_ms: LASER_TOWER_INTERVAL_MS,
                cost: LASER_TOWER_COST,
                splash: false,
            },
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            enemies: EnemyTable::default(),
            towers: TowerTable::default(),
            starting_money: STARTING_MONEY,
            starting_lives: STARTING_LIVES,
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            tower_clearance: TOWER_CLEARANCE,
            path_clearance: PATH_CLEARANCE,
            waypoint_proximity: WAYPOINT_PROXIMITY,
            spawn_delay_ms: SPAWN_DELAY_MS,
            wave_quota_base: WAVE_QUOTA_BASE,
            wave_quota_growth: WAVE_QUOTA_GROWTH,
            wave_quota_cap: WAVE_QUOTA_CAP,
            final_wave: FINAL_WAVE,
            splash_radius: SPLASH_RADIUS,
            splash_fraction: SPLASH_FRACTION,
            freeze_slow_factor: FREEZE_SLOW_FACTOR,
            freeze_slow_ms: FREEZE_SLOW_MS,
        }
    }
}
