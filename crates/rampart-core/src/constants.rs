//! Simulation constants and tuning parameters.
//!
//! These seed `RulesConfig::default()`; the engine only ever reads the
//! config, so a rules file can override any of them.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Session ---

pub const STARTING_MONEY: i64 = 200;
pub const STARTING_LIVES: i32 = 20;

// --- Play field ---

pub const FIELD_WIDTH: f64 = 1000.0;
pub const FIELD_HEIGHT: f64 = 600.0;

/// Authored lane, entry at the left edge and exit at the right edge.
pub const DEFAULT_ROUTE: [(f64, f64); 10] = [
    (0.0, 350.0),
    (200.0, 350.0),
    (200.0, 200.0),
    (400.0, 200.0),
    (400.0, 500.0),
    (600.0, 500.0),
    (600.0, 300.0),
    (800.0, 300.0),
    (800.0, 150.0),
    (1000.0, 150.0),
];

/// Distance below which an enemy counts as having reached its next waypoint.
pub const WAYPOINT_PROXIMITY: f64 = 5.0;

// --- Placement ---

/// Minimum separation between two tower centres.
pub const TOWER_CLEARANCE: f64 = 50.0;

/// Minimum distance from a tower centre to any lane segment.
pub const PATH_CLEARANCE: f64 = 25.0;

// --- Waves ---

/// Milliseconds between consecutive spawns within a wave.
pub const SPAWN_DELAY_MS: u64 = 1000;

pub const WAVE_QUOTA_BASE: u32 = 8;
pub const WAVE_QUOTA_GROWTH: u32 = 2;
pub const WAVE_QUOTA_CAP: u32 = 20;

/// Completing this wave wins the session.
pub const FINAL_WAVE: u32 = 15;

// --- Tower effects ---

/// Radius around an explosive tower's target that receives secondary damage.
pub const SPLASH_RADIUS: f64 = 60.0;

/// Share of the primary damage dealt to secondary splash victims.
pub const SPLASH_FRACTION: f64 = 0.5;

/// Speed multiplier applied to enemies hit by a freeze tower.
pub const FREEZE_SLOW_FACTOR: f64 = 0.5;

/// How long a freeze slow lasts (ms).
pub const FREEZE_SLOW_MS: u64 = 1500;

// --- Enemy profiles ---

/// Basic: baseline walker.
pub const BASIC_ENEMY_HP: i32 = 100;
pub const BASIC_ENEMY_SPEED: f64 = 120.0;
pub const BASIC_ENEMY_REWARD: i64 = 10;
pub const BASIC_ENEMY_RADIUS: f64 = 15.0;

/// Fast: fragile, double speed.
pub const FAST_ENEMY_HP: i32 = 60;
pub const FAST_ENEMY_SPEED: f64 = 240.0;
pub const FAST_ENEMY_REWARD: i64 = 15;
pub const FAST_ENEMY_RADIUS: f64 = 12.0;

/// Tank: slow, triple health.
pub const TANK_ENEMY_HP: i32 = 300;
pub const TANK_ENEMY_SPEED: f64 = 60.0;
pub const TANK_ENEMY_REWARD: i64 = 25;
pub const TANK_ENEMY_RADIUS: f64 = 20.0;

pub const FLYING_ENEMY_HP: i32 = 80;
pub const FLYING_ENEMY_SPEED: f64 = 180.0;
pub const FLYING_ENEMY_REWARD: i64 = 20;
pub const FLYING_ENEMY_RADIUS: f64 = 14.0;

/// Boss: late-wave heavy.
pub const BOSS_ENEMY_HP: i32 = 800;
pub const BOSS_ENEMY_SPEED: f64 = 90.0;
pub const BOSS_ENEMY_REWARD: i64 = 100;
pub const BOSS_ENEMY_RADIUS: f64 = 25.0;

// --- Tower profiles ---

pub const BASIC_TOWER_DAMAGE: i32 = 30;
pub const BASIC_TOWER_RANGE: f64 = 100.0;
pub const BASIC_TOWER_INTERVAL_MS: u64 = 1000;
pub const BASIC_TOWER_COST: i64 = 50;

/// Sniper: long range, slow cadence.
pub const SNIPER_TOWER_DAMAGE: i32 = 150;
pub const SNIPER_TOWER_RANGE: f64 = 200.0;
pub const SNIPER_TOWER_INTERVAL_MS: u64 = 2000;
pub const SNIPER_TOWER_COST: i64 = 150;

/// Freeze: light damage plus a slow debuff.
pub const FREEZE_TOWER_DAMAGE: i32 = 20;
pub const FREEZE_TOWER_RANGE: f64 = 80.0;
pub const FREEZE_TOWER_INTERVAL_MS: u64 = 500;
pub const FREEZE_TOWER_COST: i64 = 100;

/// Explosive: splash around the primary target.
pub const EXPLOSIVE_TOWER_DAMAGE: i32 = 80;
pub const EXPLOSIVE_TOWER_RANGE: f64 = 90.0;
pub const EXPLOSIVE_TOWER_INTERVAL_MS: u64 = 1500;
pub const EXPLOSIVE_TOWER_COST: i64 = 200;

/// Laser: rapid fire.
pub const LASER_TOWER_DAMAGE: i32 = 60;
pub const LASER_TOWER_RANGE: f64 = 120.0;
pub const LASER_TOWER_INTERVAL_MS: u64 = 100;
pub const LASER_TOWER_COST: i64 = 300;
