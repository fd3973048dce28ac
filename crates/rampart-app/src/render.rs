//! Renderers: a HUD-style text log, newline-delimited JSON snapshots, or nothing.

use std::io::{self, Write};

use rampart_core::enums::Terminal;
use rampart_core::events::SimEvent;
use rampart_core::ports::Renderer;
use rampart_core::state::FrameSnapshot;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RenderMode {
    #[default]
    Text,
    Json,
    None,
}

/// One HUD line per frame, plus a line for each notable event.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn event_line(event: &SimEvent) -> Option<String> {
        match event {
            SimEvent::TowerPlaced {
                tower,
                kind,
                position,
                cost,
            } => Some(format!(
                "tower #{} {:?} placed at ({:.0}, {:.0}) for {}",
                tower.0, kind, position.x, position.y, cost
            )),
            SimEvent::PlacementRejected { kind, reason, .. } => {
                Some(format!("cannot place {kind:?}: {reason}"))
            }
            SimEvent::WaveCompleted { wave, next_quota } => Some(format!(
                "wave {wave} cleared, next wave brings {next_quota} enemies"
            )),
            SimEvent::GameLost { wave, score } => {
                Some(format!("the lane was overrun in wave {wave} (score {score})"))
            }
            SimEvent::GameWon { score } => Some(format!("all waves repelled (score {score})")),
            SimEvent::SessionReset => Some("new session".to_string()),
            SimEvent::EnemySpawned { .. }
            | SimEvent::ShotFired { .. }
            | SimEvent::EnemyDefeated { .. }
            | SimEvent::EnemyEscaped { .. } => None,
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, frame: &FrameSnapshot) -> io::Result<()> {
        for line in frame.events.iter().filter_map(Self::event_line) {
            writeln!(self.out, "  > {line}")?;
        }

        let s = &frame.summary;
        writeln!(
            self.out,
            "[{:>8.2}s] wave {:>2} ({}/{})  money {:>5}  lives {:>2}  score {:>5}  enemies {:>2}  towers {:>2}  build {:?}",
            frame.time.elapsed_ms as f64 / 1000.0,
            s.wave,
            s.spawned,
            s.quota,
            s.money,
            s.lives,
            s.score,
            frame.enemies.len(),
            frame.towers.len(),
            frame.selected_tower,
        )
    }

    fn finish(&mut self, frame: &FrameSnapshot) -> io::Result<()> {
        self.render(frame)?;
        let banner = match frame.terminal {
            Terminal::Won => "VICTORY",
            Terminal::Lost => "GAME OVER",
            Terminal::Playing => "STOPPED",
        };
        writeln!(
            self.out,
            "=== {banner} === wave {} score {}",
            frame.summary.wave, frame.summary.score
        )?;
        self.out.flush()
    }
}

/// One JSON snapshot per line.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, frame: &FrameSnapshot) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")
    }

    fn finish(&mut self, frame: &FrameSnapshot) -> io::Result<()> {
        self.render(frame)?;
        self.out.flush()
    }
}

/// Discards every frame.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &FrameSnapshot) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_core::enums::TowerType;
    use rampart_core::errors::PlacementError;
    use rampart_core::types::Position;

    #[test]
    fn test_text_hud_line() {
        let mut frame = FrameSnapshot::default();
        frame.summary.money = 200;
        frame.summary.lives = 20;
        frame.summary.wave = 1;
        frame.summary.quota = 10;

        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&frame).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        assert!(text.contains("wave  1 (0/10)"));
        assert!(text.contains("money   200"));
        assert!(text.contains("lives 20"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_text_reports_rejections_and_banner() {
        let mut frame = FrameSnapshot {
            terminal: Terminal::Lost,
            ..Default::default()
        };
        frame.events.push(SimEvent::PlacementRejected {
            kind: TowerType::Laser,
            position: Position::new(1.0, 1.0),
            reason: PlacementError::InsufficientFunds {
                cost: 300,
                available: 200,
            },
        });

        let mut renderer = TextRenderer::new(Vec::new());
        renderer.finish(&frame).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        assert!(text.contains("cannot place Laser: insufficient funds"));
        assert!(text.contains("=== GAME OVER ==="));
    }

    #[test]
    fn test_json_one_snapshot_per_line() {
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&FrameSnapshot::default()).unwrap();
        renderer.render(&FrameSnapshot::default()).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let parsed: FrameSnapshot = serde_json::from_str(line).unwrap();
            assert_eq!(parsed.terminal, Terminal::Playing);
        }
    }
}
