//! Game loop: pulls intents, ticks the engine and hands snapshots to a renderer.
//!
//! Runs flat out by default. In realtime mode it sleeps to hold the
//! simulation at `TICK_RATE`, resetting the schedule instead of spiralling
//! when it falls too far behind.

use std::io;
use std::time::{Duration, Instant};

use rampart_core::constants::TICK_RATE;
use rampart_core::events::SimEvent;
use rampart_core::ports::{InputSource, Renderer};
use rampart_core::state::FrameSnapshot;
use rampart_sim::engine::SimulationEngine;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    /// Stop after this many loop iterations.
    pub max_ticks: Option<u64>,
    /// Render every n-th frame. The final frame is always rendered.
    pub render_every: u64,
    /// Sleep to hold the loop at `TICK_RATE`.
    pub realtime: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            max_ticks: None,
            render_every: 1,
            realtime: false,
        }
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Quit,
    MaxTicks,
    /// The session ended and the input source has nothing more to send.
    SessionOver,
}

/// Summary of a finished run.
#[derive(Debug, Clone)]
pub struct SessionReport {
    /// Loop iterations run.
    pub ticks: u64,
    pub stop: StopReason,
    pub final_frame: FrameSnapshot,
}

/// Fixed-rate sleeper.
struct Pacer {
    next_tick_time: Instant,
}

impl Pacer {
    fn new() -> Self {
        Self {
            next_tick_time: Instant::now(),
        }
    }

    fn wait(&mut self) {
        self.next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if self.next_tick_time > now {
            std::thread::sleep(self.next_tick_time - now);
        } else if now - self.next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset the schedule
            self.next_tick_time = now;
        }
    }
}

/// Run the engine until quit, `max_ticks`, or a finished session with no
/// further input. Events from frames skipped by `render_every` are carried
/// into the next rendered frame.
pub fn run_session(
    engine: &mut SimulationEngine,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    options: &LoopOptions,
) -> io::Result<SessionReport> {
    let every = options.render_every.max(1);
    let mut pacer = options.realtime.then(Pacer::new);
    let mut carried_events: Vec<SimEvent> = Vec::new();
    let mut ticks: u64 = 0;

    let (stop, mut frame) = loop {
        // 1. Drain intents due for this tick
        engine.queue_intents(input.poll(ticks));

        // 2. Advance one tick
        let mut frame = engine.tick();
        ticks += 1;

        // 3. Decide whether to stop
        let stop = if engine.quit_requested() {
            Some(StopReason::Quit)
        } else if options.max_ticks.is_some_and(|max| ticks >= max) {
            Some(StopReason::MaxTicks)
        } else if frame.terminal.is_over() && input.is_exhausted() {
            Some(StopReason::SessionOver)
        } else {
            None
        };
        if let Some(stop) = stop {
            break (stop, frame);
        }

        // 4. Render (or hold events for the next rendered frame)
        if ticks % every == 0 {
            if !carried_events.is_empty() {
                carried_events.append(&mut frame.events);
                frame.events = std::mem::take(&mut carried_events);
            }
            renderer.render(&frame)?;
        } else {
            carried_events.append(&mut frame.events);
        }

        // 5. Sleep until next tick
        if let Some(pacer) = pacer.as_mut() {
            pacer.wait();
        }
    };

    if !carried_events.is_empty() {
        carried_events.append(&mut frame.events);
        frame.events = carried_events;
    }
    renderer.finish(&frame)?;

    Ok(SessionReport {
        ticks,
        stop,
        final_frame: frame,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rampart_core::commands::Intent;
    use rampart_core::config::RulesConfig;
    use rampart_core::enums::{Terminal, TowerType};
    use rampart_sim::engine::SimConfig;

    use crate::input::{ScriptEntry, ScriptedInput};
    use crate::render::NullRenderer;

    /// Records every frame it is given.
    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<FrameSnapshot>,
        finished: Option<FrameSnapshot>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, frame: &FrameSnapshot) -> io::Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }

        fn finish(&mut self, frame: &FrameSnapshot) -> io::Result<()> {
            self.finished = Some(frame.clone());
            Ok(())
        }
    }

    fn entry(tick: u64, intent: Intent) -> ScriptEntry {
        ScriptEntry { tick, intent }
    }

    #[test]
    fn test_stops_at_max_ticks() {
        let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let mut input = ScriptedInput::default();
        let mut renderer = RecordingRenderer::default();
        let options = LoopOptions {
            max_ticks: Some(120),
            render_every: 30,
            ..Default::default()
        };

        let report = run_session(&mut engine, &mut input, &mut renderer, &options).unwrap();
        assert_eq!(report.stop, StopReason::MaxTicks);
        assert_eq!(report.ticks, 120);
        // Ticks 30, 60, 90 render; tick 120 is the final frame.
        assert_eq!(renderer.frames.len(), 3);
        assert_eq!(renderer.finished.unwrap().time.tick, 120);
    }

    #[test]
    fn test_quit_intent_stops_loop() {
        let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let mut input = ScriptedInput::new(vec![entry(10, Intent::Quit)]);
        let options = LoopOptions::default();

        let report =
            run_session(&mut engine, &mut input, &mut NullRenderer, &options).unwrap();
        assert_eq!(report.stop, StopReason::Quit);
        assert_eq!(report.ticks, 11);
    }

    #[test]
    fn test_scripted_placements_reach_engine() {
        let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let mut input = ScriptedInput::new(vec![
            entry(
                0,
                Intent::SelectTowerType {
                    kind: TowerType::Sniper,
                },
            ),
            entry(0, Intent::PlaceTowerAt { x: 300.0, y: 300.0 }),
        ]);
        let options = LoopOptions {
            max_ticks: Some(5),
            ..Default::default()
        };

        let report =
            run_session(&mut engine, &mut input, &mut NullRenderer, &options).unwrap();
        assert_eq!(report.final_frame.towers.len(), 1);
        assert_eq!(report.final_frame.towers[0].kind, TowerType::Sniper);
        assert_eq!(report.final_frame.summary.money, 50);
    }

    #[test]
    fn test_skipped_frame_events_are_carried() {
        let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let mut input = ScriptedInput::new(vec![entry(
            0,
            Intent::PlaceTowerAt { x: 150.0, y: 300.0 },
        )]);
        let mut renderer = RecordingRenderer::default();
        let options = LoopOptions {
            max_ticks: Some(200),
            render_every: 100,
            ..Default::default()
        };

        run_session(&mut engine, &mut input, &mut renderer, &options).unwrap();
        let first = &renderer.frames[0];
        assert_eq!(first.time.tick, 100);
        assert!(first
            .events
            .iter()
            .any(|e| matches!(e, SimEvent::TowerPlaced { .. })));
        assert!(first
            .events
            .iter()
            .any(|e| matches!(e, SimEvent::EnemySpawned { .. })));
    }

    #[test]
    fn test_finished_session_stops_once_input_exhausted() {
        let rules = RulesConfig {
            starting_lives: 1,
            ..Default::default()
        };
        let mut engine = SimulationEngine::new(SimConfig {
            rules,
            ..Default::default()
        })
        .unwrap();
        let mut input = ScriptedInput::default();
        let options = LoopOptions {
            max_ticks: Some(60 * 60 * 5),
            ..Default::default()
        };

        let report =
            run_session(&mut engine, &mut input, &mut NullRenderer, &options).unwrap();
        assert_eq!(report.stop, StopReason::SessionOver);
        assert_eq!(report.final_frame.terminal, Terminal::Lost);
    }

    #[test]
    fn test_restart_script_keeps_loop_alive() {
        let rules = RulesConfig {
            starting_lives: 1,
            ..Default::default()
        };
        let mut engine = SimulationEngine::new(SimConfig {
            rules,
            ..Default::default()
        })
        .unwrap();
        // The first loss lands well before tick 3000; the restart is queued
        // then and the second session runs out the tick budget.
        let mut input = ScriptedInput::new(vec![entry(3000, Intent::Restart)]);
        let options = LoopOptions {
            max_ticks: Some(3100),
            ..Default::default()
        };

        let report =
            run_session(&mut engine, &mut input, &mut NullRenderer, &options).unwrap();
        assert_eq!(report.stop, StopReason::MaxTicks);
        assert_eq!(report.final_frame.terminal, Terminal::Playing);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
