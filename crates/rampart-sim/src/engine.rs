//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and every piece of mutable
//! session state, processes player intents, runs all systems, and produces
//! `FrameSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use rampart_core::commands::Intent;
use rampart_core::components::TowerId;
use rampart_core::config::RulesConfig;
use rampart_core::enums::{Terminal, TowerType};
use rampart_core::errors::{PlacementError, RulesError};
use rampart_core::events::SimEvent;
use rampart_core::state::FrameSnapshot;
use rampart_core::types::{Path, Position, SimTime};

use crate::economy::Ledger;
use crate::placement;
use crate::systems;
use crate::systems::snapshot::SessionView;
use crate::systems::wave_director::{WaveOutcome, WaveState};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub rules: RulesConfig,
    pub path: Path,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rules: RulesConfig::default(),
            path: Path::default_route(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rules: RulesConfig,
    path: Path,
    rng: ChaCha8Rng,
    ledger: Ledger,
    wave: WaveState,
    terminal: Terminal,
    selected_tower: TowerType,
    next_enemy_id: u32,
    next_tower_id: u32,
    quit_requested: bool,
    intent_queue: VecDeque<Intent>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    ///
    /// Fails if the rules cannot drive a session.
    pub fn new(config: SimConfig) -> Result<Self, RulesError> {
        config.rules.validate()?;
        let time = SimTime::default();
        Ok(Self {
            world: World::new(),
            ledger: Ledger::new(&config.rules),
            wave: WaveState::first(&config.rules, time.elapsed_ms),
            time,
            rules: config.rules,
            path: config.path,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            terminal: Terminal::Playing,
            selected_tower: TowerType::default(),
            next_enemy_id: 0,
            next_tower_id: 0,
            quit_requested: false,
            intent_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Queue an intent for processing at the next tick boundary.
    pub fn queue_intent(&mut self, intent: Intent) {
        self.intent_queue.push_back(intent);
    }

    /// Queue multiple intents.
    pub fn queue_intents(&mut self, intents: impl IntoIterator<Item = Intent>) {
        self.intent_queue.extend(intents);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Once the session is over the world is frozen: intents are still
    /// processed (so `Restart` works) but time does not advance.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.process_intents();

        if !self.terminal.is_over() {
            self.time.advance();
            self.run_systems();
        }

        self.snapshot()
    }

    /// Build a snapshot of the current state, draining pending events.
    pub fn snapshot(&mut self) -> FrameSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            SessionView {
                time: self.time,
                terminal: self.terminal,
                selected_tower: self.selected_tower,
                ledger: &self.ledger,
                wave: &self.wave,
                path: &self.path,
            },
            events,
        )
    }

    /// Place a tower of `kind` at `position`, paying its cost.
    ///
    /// Rejections leave every piece of state untouched.
    pub fn place_tower(
        &mut self,
        kind: TowerType,
        position: Position,
    ) -> Result<TowerId, PlacementError> {
        let result = self.try_place_tower(kind, position);
        match result {
            Ok(id) => {
                let cost = self.rules.tower(kind).cost;
                debug!(
                    tower = id.0,
                    ?kind,
                    x = position.x,
                    y = position.y,
                    money = self.ledger.money,
                    "tower placed"
                );
                self.events.push(SimEvent::TowerPlaced {
                    tower: id,
                    kind,
                    position,
                    cost,
                });
            }
            Err(reason) => {
                debug!(
                    ?kind,
                    x = position.x,
                    y = position.y,
                    %reason,
                    "placement rejected"
                );
                self.events.push(SimEvent::PlacementRejected {
                    kind,
                    position,
                    reason,
                });
            }
        }
        result
    }

    fn try_place_tower(
        &mut self,
        kind: TowerType,
        position: Position,
    ) -> Result<TowerId, PlacementError> {
        if self.terminal.is_over() {
            return Err(PlacementError::SessionOver);
        }

        let stats = *self.rules.tower(kind);
        placement::validate(
            &self.world,
            &self.rules,
            &self.path,
            &self.ledger,
            stats.cost,
            position,
        )?;
        self.ledger.spend(stats.cost)?;

        let id = TowerId(self.next_tower_id);
        self.next_tower_id += 1;
        world_setup::spawn_tower(&mut self.world, id, kind, stats, position);
        Ok(id)
    }

    /// Choose the tower type used by `PlaceTowerAt`. Ignored once the session is over.
    pub fn select_tower_type(&mut self, kind: TowerType) -> bool {
        if self.terminal.is_over() {
            return false;
        }
        self.selected_tower = kind;
        true
    }

    /// Reinitialize the session: economy, wave 1, no towers or enemies.
    ///
    /// The clock keeps running so elapsed time stays monotonic; the first
    /// spawn of the new session is one spawn delay away.
    pub fn reset(&mut self) {
        self.world.clear();
        self.ledger = Ledger::new(&self.rules);
        self.wave = WaveState::first(&self.rules, self.time.elapsed_ms);
        self.terminal = Terminal::Playing;
        self.selected_tower = TowerType::default();
        self.next_enemy_id = 0;
        self.next_tower_id = 0;
        self.despawn_buffer.clear();
        self.events.push(SimEvent::SessionReset);
        info!(tick = self.time.tick, "session reset");
    }

    pub fn money(&self) -> i64 {
        self.ledger.money
    }

    pub fn lives(&self) -> i32 {
        self.ledger.lives
    }

    pub fn score(&self) -> i64 {
        self.ledger.score
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    pub fn terminal(&self) -> Terminal {
        self.terminal
    }

    pub fn selected_tower(&self) -> TowerType {
        self.selected_tower
    }

    /// True once a `Quit` intent has been processed.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage enemies directly.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Allocate the next enemy id (for tests that spawn enemies by hand).
    #[cfg(test)]
    pub fn next_enemy_id(&mut self) -> rampart_core::components::EnemyId {
        let id = rampart_core::components::EnemyId(self.next_enemy_id);
        self.next_enemy_id += 1;
        id
    }

    /// Process all queued intents.
    fn process_intents(&mut self) {
        while let Some(intent) = self.intent_queue.pop_front() {
            self.handle_intent(intent);
        }
    }

    /// Handle a single intent.
    fn handle_intent(&mut self, intent: Intent) {
        match intent {
            Intent::SelectTowerType { kind } => {
                self.select_tower_type(kind);
            }
            Intent::PlaceTowerAt { x, y } => {
                let _ = self.place_tower(self.selected_tower, Position::new(x, y));
            }
            Intent::Restart => {
                if self.terminal.is_over() {
                    self.reset();
                }
            }
            Intent::Quit => {
                self.quit_requested = true;
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_ms;

        // 1. Wave spawning
        systems::wave_director::maybe_spawn(
            &mut self.world,
            &mut self.rng,
            &mut self.wave,
            &self.rules,
            &self.path,
            &mut self.next_enemy_id,
            now,
            &mut self.events,
        );
        // 2. Enemy movement
        systems::movement::run(&mut self.world, &self.path, &self.rules, now);
        // 3. Cleanup (reconcile defeated/escaped against the ledger)
        systems::cleanup::run(
            &mut self.world,
            &mut self.ledger,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        if self.ledger.is_depleted() {
            self.terminal = Terminal::Lost;
            info!(
                wave = self.wave.wave_number,
                score = self.ledger.score,
                "session lost"
            );
            self.events.push(SimEvent::GameLost {
                wave: self.wave.wave_number,
                score: self.ledger.score,
            });
            return;
        }
        // 4. Combat
        systems::combat::run(&mut self.world, &self.rules, now, &mut self.events);
        // 5. Wave completion / victory
        let outcome =
            systems::wave_director::check_wave_complete(&self.world, &mut self.wave, &self.rules);
        match outcome {
            WaveOutcome::InProgress => {}
            WaveOutcome::Advanced {
                completed,
                next_quota,
            } => {
                info!(
                    completed,
                    next_wave = self.wave.wave_number,
                    next_quota,
                    "wave completed"
                );
                self.events.push(SimEvent::WaveCompleted {
                    wave: completed,
                    next_quota,
                });
            }
            WaveOutcome::Victory => {
                self.terminal = Terminal::Won;
                info!(score = self.ledger.score, "session won");
                self.events.push(SimEvent::GameWon {
                    score: self.ledger.score,
                });
            }
        }
    }
}
