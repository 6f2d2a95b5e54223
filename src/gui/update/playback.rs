//! gui/update/playback.rs
//! GUI-playback engine bridge.
//!
//! Design goals:
//! - The GUI never touches rodio/symphonia directly.
//! - All IO and timing is driven by the engine thread + TickPlayback polling.

use std::path::PathBuf;

use iced::Task;
use tracing::debug;

use super::super::state::{Message, OsuRadio};
use crate::core::playback::{PlayerCommand, PlayerEvent, start_playback};

fn ensure_engine(state: &mut OsuRadio) {
    if state.playback.is_some() && state.playback_events.is_some() {
        return;
    }

    let (controller, events) = start_playback();
    controller.send(PlayerCommand::SetVolume(state.volume));

    state.playback = Some(controller);
    state.playback_events = Some(std::cell::RefCell::new(events));
}

pub(crate) fn drain_events(state: &mut OsuRadio) -> Task<Message> {
    let Some(rx_cell) = state.playback_events.as_ref() else {
        return Task::none();
    };

    let mut drained: Vec<PlayerEvent> = Vec::new();
    {
        // Receiver::try_recv only needs &self, so borrow() is enough.
        let rx = rx_cell.borrow();
        while let Ok(ev) = rx.try_recv() {
            drained.push(ev);
        }
    }

    for ev in drained {
        handle_event(state, ev);
    }

    Task::none()
}

/// Start playing the given audio file from the top.
pub(crate) fn play_path(state: &mut OsuRadio, path: PathBuf) -> Task<Message> {
    ensure_engine(state);

    let Some(controller) = &state.playback else {
        state.status = "Playback engine failed to initialize.".to_string();
        return Task::none();
    };

    debug!(path = %path.display(), "play");
    controller.send(PlayerCommand::Play(path));

    state.is_playing = true;
    state.position_ms = 0;
    state.duration_ms = None;
    state.seek_preview_ratio = None;

    Task::none()
}

pub(crate) fn toggle_play_pause(state: &mut OsuRadio) -> Task<Message> {
    if state.is_playing {
        return pause(state);
    }

    // Paused mid-track: resume. Stopped or ended: restart from the top.
    if state.duration_ms.is_some() {
        return resume(state);
    }

    let Some(path) = state
        .now_playing
        .as_ref()
        .map(|n| n.descriptor.audio_path.clone())
    else {
        state.status = "Pick a beatmap set first.".to_string();
        return Task::none();
    };

    play_path(state, path)
}

fn pause(state: &mut OsuRadio) -> Task<Message> {
    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::Pause);
        state.is_playing = false;
    }

    Task::none()
}

fn resume(state: &mut OsuRadio) -> Task<Message> {
    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::Resume);
        state.is_playing = true;
    }

    Task::none()
}

pub(crate) fn stop(state: &mut OsuRadio) -> Task<Message> {
    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::Stop);
    }

    state.is_playing = false;
    state.position_ms = 0;
    state.duration_ms = None;
    state.seek_preview_ratio = None;

    Task::none()
}

/// Seek slider changed: preview only (UI updates, no engine command).
pub(crate) fn seek_preview(state: &mut OsuRadio, ratio: f32) -> Task<Message> {
    let Some(dur_ms) = state.duration_ms else {
        return Task::none();
    };

    let ratio = ratio.clamp(0.0, 1.0);
    state.seek_preview_ratio = Some(ratio);

    let target_ms = ((ratio as f64) * (dur_ms as f64)).round() as u64;
    state.position_ms = target_ms.min(dur_ms);

    Task::none()
}

/// Seek slider released: commit the last preview to the engine.
pub(crate) fn seek_commit(state: &mut OsuRadio) -> Task<Message> {
    let Some(dur_ms) = state.duration_ms else {
        state.seek_preview_ratio = None;
        return Task::none();
    };

    let Some(ratio) = state.seek_preview_ratio.take() else {
        return Task::none();
    };

    let Some(controller) = &state.playback else {
        return Task::none();
    };

    let target_ms = ((ratio as f64) * (dur_ms as f64)).round() as u64;

    debug!(target_ms, "seek commit");
    controller.send(PlayerCommand::Seek(target_ms));

    // Optimistic UI update; the engine confirms via Started/Position.
    state.position_ms = target_ms.min(dur_ms);

    Task::none()
}

pub(crate) fn set_volume(state: &mut OsuRadio, volume: f32) -> Task<Message> {
    let volume = volume.clamp(0.0, 1.0);
    state.volume = volume;

    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::SetVolume(volume));
    }

    Task::none()
}

fn handle_event(state: &mut OsuRadio, event: PlayerEvent) {
    match event {
        PlayerEvent::Started {
            path,
            duration_ms,
            start_ms,
        } => {
            debug!(path = %path.display(), ?duration_ms, start_ms, "playback started");
            state.is_playing = true;
            state.duration_ms = duration_ms;
            state.position_ms = start_ms;
            state.seek_preview_ratio = None;
        }
        PlayerEvent::Paused => state.is_playing = false,
        PlayerEvent::Resumed => state.is_playing = true,
        PlayerEvent::Stopped => {
            state.is_playing = false;
            state.position_ms = 0;
            state.duration_ms = None;
            state.seek_preview_ratio = None;
        }
        PlayerEvent::Position { position_ms } => {
            // If the user is dragging the seek slider, don't fight them.
            if state.seek_preview_ratio.is_none() {
                state.position_ms = position_ms;
            }
        }
        PlayerEvent::TrackEnded => {
            state.is_playing = false;
            state.position_ms = 0;
            state.duration_ms = None;
            state.seek_preview_ratio = None;
        }
        PlayerEvent::Error(err) => {
            state.status = format!("Playback error: {err}");
        }
    }
}
