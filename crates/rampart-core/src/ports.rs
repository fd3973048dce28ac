//! Ports to the outside world.
//!
//! The simulation never draws or polls devices itself. A game loop pulls
//! intents from an `InputSource`, ticks the engine, and pushes the resulting
//! snapshot into a `Renderer`.

use std::io;

use crate::commands::Intent;
use crate::state::FrameSnapshot;

/// Consumes read-only snapshots and produces a visual (or textual) frame.
pub trait Renderer {
    fn render(&mut self, frame: &FrameSnapshot) -> io::Result<()>;

    /// Called once after the loop ends with the last snapshot.
    fn finish(&mut self, frame: &FrameSnapshot) -> io::Result<()> {
        self.render(frame)
    }
}

/// Yields discrete user intents.
pub trait InputSource {
    /// Intents that became available up to and including `tick`.
    fn poll(&mut self, tick: u64) -> Vec<Intent>;

    /// True once the source will never yield another intent.
    fn is_exhausted(&self) -> bool {
        false
    }
}
