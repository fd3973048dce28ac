//! Input sources: scripted intents from a file and live intents over a channel.

use std::collections::VecDeque;
use std::io::BufRead;
use std::sync::mpsc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use rampart_core::commands::Intent;
use rampart_core::ports::InputSource;

/// One scripted intent, delivered before loop tick `tick` runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub tick: u64,
    pub intent: Intent,
}

/// Replays a fixed list of intents keyed by loop tick.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending: VecDeque<ScriptEntry>,
}

impl ScriptedInput {
    /// Entries are ordered by tick; entries sharing a tick keep file order.
    pub fn new(mut entries: Vec<ScriptEntry>) -> Self {
        entries.sort_by_key(|entry| entry.tick);
        Self {
            pending: entries.into(),
        }
    }

    /// Parse a JSON array of `{ "tick": n, "intent": {...} }` objects.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let entries: Vec<ScriptEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, tick: u64) -> Vec<Intent> {
        let mut due = Vec::new();
        while let Some(entry) = self.pending.front() {
            if entry.tick > tick {
                break;
            }
            due.push(entry.intent);
            self.pending.pop_front();
        }
        due
    }

    fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Drains intents sent from another thread without blocking.
pub struct ChannelInput {
    rx: mpsc::Receiver<Intent>,
    disconnected: bool,
}

impl ChannelInput {
    pub fn new(rx: mpsc::Receiver<Intent>) -> Self {
        Self {
            rx,
            disconnected: false,
        }
    }

    /// Read newline-delimited JSON intents from `reader` on a background thread.
    ///
    /// Malformed lines are logged and skipped. The source is exhausted once
    /// the reader hits end of input.
    pub fn spawn_reader<R>(reader: R) -> std::io::Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<Intent>();

        std::thread::Builder::new()
            .name("rampart-input".into())
            .spawn(move || {
                for line in reader.lines() {
                    let Ok(line) = line else { break };
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<Intent>(line) {
                        Ok(intent) => {
                            if tx.send(intent).is_err() {
                                break;
                            }
                        }
                        Err(err) => warn!(%err, line, "ignoring malformed intent"),
                    }
                }
            })?;

        Ok(Self::new(rx))
    }
}

impl InputSource for ChannelInput {
    fn poll(&mut self, _tick: u64) -> Vec<Intent> {
        let mut intents = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(intent) => intents.push(intent),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.disconnected = true;
                    break;
                }
            }
        }
        intents
    }

    fn is_exhausted(&self) -> bool {
        self.disconnected
    }
}
