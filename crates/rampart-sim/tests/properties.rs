//! Property-based tests for damage, cooldown gating and the economy ledger.

use hecs::World;
use proptest::prelude::*;

use rampart_core::components::{EnemyId, Health, Tower, TowerId};
use rampart_core::config::{EnemyStats, RulesConfig};
use rampart_core::enums::{EnemyStatus, EnemyType, TowerType};
use rampart_core::types::Position;
use rampart_enemy::fsm::take_damage;
use rampart_sim::economy::Ledger;
use rampart_sim::systems::combat::{fire, TargetLock};
use rampart_sim::world_setup;

fn tower_type() -> impl Strategy<Value = TowerType> {
    prop::sample::select(TowerType::ALL.to_vec())
}

fn status() -> impl Strategy<Value = EnemyStatus> {
    prop::sample::select(vec![
        EnemyStatus::Alive,
        EnemyStatus::Defeated,
        EnemyStatus::Escaped,
    ])
}

/// One tower locked onto one durable, stationary enemy.
fn duel(kind: TowerType, rules: &RulesConfig) -> (World, hecs::Entity, hecs::Entity) {
    let mut world = World::new();
    let stats = EnemyStats {
        max_hp: 1_000_000,
        speed: 0.0,
        reward: 1,
        hitbox_radius: 10.0,
    };
    let enemy = world_setup::spawn_enemy_at(
        &mut world,
        EnemyId(0),
        EnemyType::Tank,
        &stats,
        Position::new(100.0, 130.0),
        0,
    );
    let tower = world_setup::spawn_tower(
        &mut world,
        TowerId(0),
        kind,
        *rules.tower(kind),
        Position::new(100.0, 100.0),
    );
    world.get::<&mut TargetLock>(tower).unwrap().0 = Some(enemy);
    (world, tower, enemy)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Health never rises, and the enemy is defeated exactly when it first reaches zero.
    #[test]
    fn prop_health_monotonic(
        max_hp in 1i32..2000,
        hits in prop::collection::vec(-50i32..400, 0..40),
    ) {
        let mut health = Health { current: max_hp, max: max_hp };
        let mut status = EnemyStatus::Alive;
        let mut defeats = 0;

        for amount in hits {
            let before = health.current;
            let was_alive = status.is_alive();
            let defeated_now = take_damage(&mut health, &mut status, amount);

            prop_assert!(health.current <= before);
            prop_assert!(health.current >= 0 && health.current <= health.max);
            if defeated_now {
                defeats += 1;
                prop_assert!(was_alive);
                prop_assert_eq!(health.current, 0);
            }
            prop_assert_eq!(status == EnemyStatus::Defeated, health.current == 0);
        }
        prop_assert!(defeats <= 1);
    }

    /// A second shot lands only when at least one fire interval has elapsed.
    #[test]
    fn prop_cooldown_gating(
        kind in tower_type(),
        first in 0u64..1_000_000,
        delta in 0u64..5000,
    ) {
        let rules = RulesConfig::default();
        let interval = rules.tower(kind).fire_interval_ms;
        let (mut world, tower, enemy) = duel(kind, &rules);

        prop_assert!(fire(&mut world, tower, &rules, first).is_some());
        let hp_before = world.get::<&Health>(enemy).unwrap().current;

        let second = fire(&mut world, tower, &rules, first + delta);
        let hp_after = world.get::<&Health>(enemy).unwrap().current;
        let last_fired = world.get::<&Tower>(tower).unwrap().last_fired_ms;

        if delta >= interval {
            prop_assert!(second.is_some());
            prop_assert!(hp_after < hp_before);
            prop_assert_eq!(last_fired, Some(first + delta));
        } else {
            prop_assert!(second.is_none());
            prop_assert_eq!(hp_after, hp_before);
            prop_assert_eq!(last_fired, Some(first));
        }
    }

    /// Rewards land in money and score exactly; each escape costs exactly one life.
    #[test]
    fn prop_ledger_conservation(
        outcomes in prop::collection::vec((status(), 0i64..1000), 0..60),
    ) {
        let rules = RulesConfig::default();
        let mut ledger = Ledger::new(&rules);

        for (status, reward) in outcomes {
            let before = ledger;
            ledger.reconcile(status, reward);

            match status {
                EnemyStatus::Defeated => {
                    prop_assert_eq!(ledger.money, before.money + reward);
                    prop_assert_eq!(ledger.score, before.score + reward);
                    prop_assert_eq!(ledger.lives, before.lives);
                }
                EnemyStatus::Escaped => {
                    prop_assert_eq!(ledger.lives, before.lives - 1);
                    prop_assert_eq!(ledger.money, before.money);
                    prop_assert_eq!(ledger.score, before.score);
                }
                EnemyStatus::Alive => prop_assert_eq!(ledger, before),
            }
            prop_assert_eq!(ledger.is_depleted(), ledger.lives <= 0);
        }
    }

    /// Spending never drives money negative and failed spends change nothing.
    #[test]
    fn prop_spend_never_overdraws(
        costs in prop::collection::vec(0i64..400, 0..30),
    ) {
        let mut ledger = Ledger::new(&RulesConfig::default());
        for cost in costs {
            let before = ledger.money;
            match ledger.spend(cost) {
                Ok(()) => prop_assert_eq!(ledger.money, before - cost),
                Err(_) => {
                    prop_assert!(before < cost);
                    prop_assert_eq!(ledger.money, before);
                }
            }
            prop_assert!(ledger.money >= 0);
        }
    }

    /// Quota follows min(cap, base + growth * wave).
    #[test]
    fn prop_quota_formula(wave in 1u32..500) {
        let rules = RulesConfig::default();
        prop_assert_eq!(rules.quota_for(wave), (8 + 2 * wave).min(20));
    }
}
