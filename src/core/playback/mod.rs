//! core/playback/mod.rs
//! Audio playback for the selected beatmap set.
//!
//! The engine runs on its own thread and owns all rodio state. The GUI
//! talks to it through a command channel and hears back through an event
//! channel; neither side ever blocks the other.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

mod decoder;
mod engine;

pub use engine::PlaybackEngine;

#[derive(Clone)]
pub struct PlaybackController {
    command_tx: Sender<PlayerCommand>,
}

impl PlaybackController {
    /// Best-effort send. If the engine died, the command is dropped.
    pub fn send(&self, cmd: PlayerCommand) {
        let _ = self.command_tx.send(cmd);
    }
}

#[derive(Debug)]
pub enum PlayerCommand {
    /// Start the given audio file from the top.
    Play(PathBuf),
    Pause,
    Resume,
    Stop,
    /// Seek the current track to an absolute position (ms).
    Seek(u64),
    /// 0.0..=1.0
    SetVolume(f32),
    Shutdown,
}

#[derive(Debug, Clone)]
pub enum PlayerEvent {
    /// Playback (re)started. Also emitted after a seek, with `start_ms`
    /// carrying the position the new source begins at.
    Started {
        path: PathBuf,
        duration_ms: Option<u64>,
        start_ms: u64,
    },
    Paused,
    Resumed,
    Stopped,
    Position { position_ms: u64 },
    TrackEnded,
    Error(String),
}

/// Spawns the playback thread and returns:
/// - a `PlaybackController` (lives in GUI state)
/// - a `Receiver<PlayerEvent>` (drained on a periodic GUI tick)
pub fn start_playback() -> (PlaybackController, Receiver<PlayerEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
    let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();

    thread::spawn(move || {
        let mut engine = match PlaybackEngine::new(event_tx.clone()) {
            Ok(e) => e,
            Err(msg) => {
                let _ = event_tx.send(PlayerEvent::Error(msg));
                return;
            }
        };

        engine.run(command_rx);
    });

    (PlaybackController { command_tx }, event_rx)
}
