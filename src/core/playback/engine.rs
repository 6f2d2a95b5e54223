//! core/playback/engine.rs
//! Playback engine (rodio owner).
//!
//! Owns:
//! - the OutputStream (must stay alive for audio to keep flowing)
//! - the Sink for the current track
//! - the command loop + periodic position ticks
//!
//! Seeking reopens the decoder at the target position instead of trusting
//! the sink's seek support; `base_ms` remembers where the active source
//! started so reported positions stay absolute.
//!
//! No iced imports here; events go back over a channel.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::debug;

use super::decoder;
use super::{PlayerCommand, PlayerEvent};

const TICK_MS: u64 = 200;

struct Current {
    path: PathBuf,
    duration_ms: Option<u64>,
    /// Absolute position the active source begins at (non-zero after seek).
    base_ms: u64,
}

pub struct PlaybackEngine {
    stream: OutputStream,

    sink: Option<Sink>,
    current: Option<Current>,
    volume: f32,

    event_tx: Sender<PlayerEvent>,
}

impl PlaybackEngine {
    pub fn new(event_tx: Sender<PlayerEvent>) -> Result<Self, String> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| format!("Audio output init failed: {e}"))?;

        Ok(Self {
            stream,
            sink: None,
            current: None,
            volume: 1.0,
            event_tx,
        })
    }

    pub fn run(&mut self, command_rx: Receiver<PlayerCommand>) {
        let tick = Duration::from_millis(TICK_MS);

        loop {
            match command_rx.recv_timeout(tick) {
                Ok(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                    while let Ok(cmd) = command_rx.try_recv() {
                        if self.handle_command(cmd) {
                            return;
                        }
                    }
                }
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
            }

            self.tick();
        }

        self.stop_internal();
    }

    /// Returns true on shutdown.
    fn handle_command(&mut self, cmd: PlayerCommand) -> bool {
        match cmd {
            PlayerCommand::Play(path) => {
                debug!(path = %path.display(), "play");
                if let Err(e) = self.start(path, 0) {
                    let _ = self.event_tx.send(PlayerEvent::Error(e));
                }
            }
            PlayerCommand::Pause => {
                if let Some(sink) = &self.sink {
                    sink.pause();
                    let _ = self.event_tx.send(PlayerEvent::Paused);
                }
            }
            PlayerCommand::Resume => {
                if let Some(sink) = &self.sink {
                    sink.play();
                    let _ = self.event_tx.send(PlayerEvent::Resumed);
                }
            }
            PlayerCommand::Stop => {
                self.stop_internal();
                let _ = self.event_tx.send(PlayerEvent::Stopped);
            }
            PlayerCommand::Seek(ms) => {
                let Some(cur) = &self.current else {
                    return false;
                };

                let path = cur.path.clone();
                // Landing exactly on EOF produces an instant TrackEnded.
                let target = match cur.duration_ms {
                    Some(dur) => ms.min(dur.saturating_sub(1)),
                    None => ms,
                };

                debug!(target_ms = target, "seek");
                if let Err(e) = self.start(path, target) {
                    let _ = self.event_tx.send(PlayerEvent::Error(e));
                }
            }
            PlayerCommand::SetVolume(v) => {
                self.volume = v.clamp(0.0, 1.0);
                if let Some(sink) = &self.sink {
                    sink.set_volume(self.volume);
                }
            }
            PlayerCommand::Shutdown => return true,
        }

        false
    }

    fn tick(&mut self) {
        let Some(sink) = &self.sink else { return };
        let Some(cur) = &self.current else { return };

        let position_ms = cur.base_ms + sink.get_pos().as_millis() as u64;
        let _ = self.event_tx.send(PlayerEvent::Position { position_ms });

        if sink.empty() {
            let _ = self.event_tx.send(PlayerEvent::TrackEnded);
            self.stop_internal();
        }
    }

    fn start(&mut self, path: PathBuf, start_ms: u64) -> Result<(), String> {
        self.stop_internal();

        let (source, duration_ms) = decoder::open_mp3_at_ms(&path, start_ms)?;

        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(self.volume);
        sink.append(source);
        sink.play();

        self.current = Some(Current {
            path: path.clone(),
            duration_ms,
            base_ms: start_ms,
        });
        self.sink = Some(sink);

        let _ = self.event_tx.send(PlayerEvent::Started {
            path,
            duration_ms,
            start_ms,
        });

        Ok(())
    }

    fn stop_internal(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.current = None;
    }
}
