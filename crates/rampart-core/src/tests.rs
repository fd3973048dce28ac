use crate::commands::Intent;
use crate::config::RulesConfig;
use crate::constants::*;
use crate::enums::*;
use crate::errors::{PathError, PlacementError, RulesError};
use crate::events::SimEvent;
use crate::state::FrameSnapshot;
use crate::types::{Path, Position, SimTime};

/// Verify Intent round-trips through serde (tagged union).
#[test]
fn test_intent_serde() {
    let intents = vec![
        Intent::SelectTowerType {
            kind: TowerType::Explosive,
        },
        Intent::PlaceTowerAt { x: 120.0, y: 80.0 },
        Intent::Restart,
        Intent::Quit,
    ];
    for intent in &intents {
        let json = serde_json::to_string(intent).unwrap();
        let back: Intent = serde_json::from_str(&json).unwrap();
        assert_eq!(*intent, back);
    }
}

#[test]
fn test_intent_json_shape() {
    let intent: Intent =
        serde_json::from_str(r#"{"type":"SelectTowerType","kind":"Sniper"}"#).unwrap();
    assert_eq!(
        intent,
        Intent::SelectTowerType {
            kind: TowerType::Sniper
        }
    );
}

#[test]
fn test_event_carries_placement_reason() {
    let event = SimEvent::PlacementRejected {
        kind: TowerType::Laser,
        position: Position::new(10.0, 10.0),
        reason: PlacementError::InsufficientFunds {
            cost: 300,
            available: 200,
        },
    };
    let json = serde_json::to_string(&event).unwrap();
    let back: SimEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(event, back);
}

#[test]
fn test_snapshot_serde() {
    let snapshot = FrameSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.time, back.time);
    assert_eq!(snapshot.terminal, back.terminal);
    assert!(
        json.len() < 512,
        "Empty snapshot should be small, was {} bytes",
        json.len()
    );
}

// ---- Geometry ----

#[test]
fn test_position_distance() {
    let a = Position::new(0.0, 0.0);
    let b = Position::new(3.0, 4.0);
    assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
}

#[test]
fn test_path_rejects_short_lists() {
    assert_eq!(
        Path::new(vec![Position::new(0.0, 0.0)]),
        Err(PathError::TooShort { len: 1 })
    );
    assert_eq!(Path::new(vec![]), Err(PathError::TooShort { len: 0 }));
}

#[test]
fn test_path_rejects_non_finite() {
    let result = Path::new(vec![
        Position::new(0.0, 0.0),
        Position::new(f64::NAN, 3.0),
    ]);
    assert_eq!(result, Err(PathError::NonFinite { index: 1 }));
}

#[test]
fn test_path_deserialize_validates() {
    let ok: Path = serde_json::from_str(r#"[{"x":0.0,"y":0.0},{"x":10.0,"y":0.0}]"#).unwrap();
    assert_eq!(ok.len(), 2);

    let bad = serde_json::from_str::<Path>(r#"[{"x":0.0,"y":0.0}]"#);
    assert!(bad.is_err(), "single-waypoint path must not deserialize");
}

#[test]
fn test_default_route_spans_field() {
    let path = Path::default_route();
    assert_eq!(path.len(), DEFAULT_ROUTE.len());
    assert_eq!(path.start(), Position::new(0.0, 350.0));
    assert_eq!(path.waypoint(path.len() - 1), Some(Position::new(1000.0, 150.0)));
    assert_eq!(path.waypoint(path.len()), None);
}

#[test]
fn test_path_distance_to_segment() {
    let path = Path::new(vec![
        Position::new(0.0, 0.0),
        Position::new(100.0, 0.0),
        Position::new(100.0, 100.0),
    ])
    .unwrap();

    // Perpendicular to the first segment.
    assert!((path.distance_to(&Position::new(50.0, 20.0)) - 20.0).abs() < 1e-10);
    // Beyond the first endpoint: distance to the endpoint itself.
    assert!((path.distance_to(&Position::new(-30.0, -40.0)) - 50.0).abs() < 1e-10);
    // Closer to the second segment.
    assert!((path.distance_to(&Position::new(110.0, 60.0)) - 10.0).abs() < 1e-10);
}

/// Verify SimTime advancement.
#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    assert_eq!(time.tick, 0);
    assert_eq!(time.elapsed_ms, 0);

    for _ in 0..TICK_RATE {
        time.advance();
    }
    assert_eq!(time.tick, TICK_RATE as u64);
    assert_eq!(time.elapsed_ms, 1000);
}

#[test]
fn test_sim_time_monotonic() {
    let mut time = SimTime::default();
    let mut last = time.elapsed_ms;
    for _ in 0..500 {
        time.advance();
        assert!(time.elapsed_ms >= last);
        last = time.elapsed_ms;
    }
}

// ---- Rules ----

#[test]
fn test_quota_formula() {
    let rules = RulesConfig::default();
    assert_eq!(rules.quota_for(1), 10);
    assert_eq!(rules.quota_for(2), 12);
    assert_eq!(rules.quota_for(5), 18);
    assert_eq!(rules.quota_for(6), 20);
    assert_eq!(rules.quota_for(15), 20, "quota is capped at 20");
}

#[test]
fn test_stat_tables_match_archetypes() {
    let rules = RulesConfig::default();
    assert_eq!(rules.enemy(EnemyType::Basic).max_hp, 100);
    assert_eq!(rules.enemy(EnemyType::Boss).reward, 100);
    assert_eq!(rules.tower(TowerType::Basic).cost, 50);
    assert_eq!(rules.tower(TowerType::Laser).fire_interval_ms, 100);

    let splash: Vec<TowerType> = TowerType::ALL
        .into_iter()
        .filter(|&kind| rules.tower(kind).splash)
        .collect();
    assert_eq!(splash, vec![TowerType::Explosive]);
}

#[test]
fn test_splash_damage_rounds_down() {
    let rules = RulesConfig::default();
    assert_eq!(rules.splash_damage(80), 40);
    assert_eq!(rules.splash_damage(25), 12);
}

#[test]
fn test_partial_rules_fall_back_to_defaults() {
    let json = r#"{ "starting_money": 999, "towers": { "laser": { "damage": 5, "range": 10.0, "fire_interval_ms": 50, "cost": 1, "splash": false } } }"#;
    let rules: RulesConfig = serde_json::from_str(json).unwrap();
    assert_eq!(rules.starting_money, 999);
    assert_eq!(rules.starting_lives, STARTING_LIVES);
    assert_eq!(rules.tower(TowerType::Laser).cost, 1);
    assert_eq!(rules.tower(TowerType::Sniper).cost, SNIPER_TOWER_COST);
}

#[test]
fn test_terminal_and_status_helpers() {
    assert!(!Terminal::Playing.is_over());
    assert!(Terminal::Lost.is_over());
    assert!(Terminal::Won.is_over());
    assert!(EnemyStatus::Alive.is_alive());
    assert!(!EnemyStatus::Defeated.is_alive());
    assert!(!EnemyStatus::Escaped.is_alive());
}

#[test]
fn test_default_rules_validate() {
    assert_eq!(RulesConfig::default().validate(), Ok(()));
}

#[test]
fn test_validate_rejects_unusable_rules() {
    let proximity = RulesConfig {
        waypoint_proximity: 0.0,
        ..Default::default()
    };
    assert_eq!(
        proximity.validate(),
        Err(RulesError::WaypointProximity(0.0))
    );

    let field = RulesConfig {
        field_height: f64::INFINITY,
        ..Default::default()
    };
    assert!(matches!(field.validate(), Err(RulesError::FieldSize { .. })));

    let no_waves = RulesConfig {
        final_wave: 0,
        ..Default::default()
    };
    assert_eq!(no_waves.validate(), Err(RulesError::NoWaves));

    let slow = RulesConfig {
        freeze_slow_factor: -0.5,
        ..Default::default()
    };
    assert!(matches!(
        slow.validate(),
        Err(RulesError::Fraction {
            name: "freeze slow factor",
            ..
        })
    ));
}

#[test]
fn test_validate_accepts_extreme_durations() {
    let rules: RulesConfig =
        serde_json::from_str(r#"{ "freeze_slow_ms": 18446744073709551615, "spawn_delay_ms": 0 }"#)
            .unwrap();
    assert_eq!(rules.freeze_slow_ms, u64::MAX);
    assert_eq!(rules.validate(), Ok(()));
}
