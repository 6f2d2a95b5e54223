//! gui/update/selection.rs
//! Set selection: load descriptor + cover off-thread, then auto-play.
//!
//! Loads carry a sequence number. If the user clicks another set before an
//! older load finishes, the stale result is dropped when it arrives; the
//! core has no cancellation, so ordering is enforced here.

use std::path::Path;

use iced::Task;
use rand::Rng;
use tracing::{debug, warn};

use super::super::state::{Message, NowPlaying, OsuRadio};
use super::playback;
use super::util::spawn_blocking;
use crate::core;
use crate::core::types::{CoverMode, CoverRef};
use crate::gui::util::decode_data_uri;

pub(crate) fn select_set(state: &mut OsuRadio, index: usize) -> Task<Message> {
    let Some(root) = state.songs_root.clone() else {
        return Task::none();
    };
    let Some(name) = state.sets.get(index).cloned() else {
        return Task::none();
    };

    state.selected = Some(index);
    state.loading = true;
    state.load_seq += 1;
    let seq = state.load_seq;
    state.status = format!("Loading {name}");

    Task::perform(
        spawn_blocking(move || load_now_playing(&root, &name)),
        move |result| Message::SetLoaded(seq, result),
    )
}

pub(crate) fn set_loaded(
    state: &mut OsuRadio,
    seq: u64,
    result: Result<NowPlaying, String>,
) -> Task<Message> {
    if seq != state.load_seq {
        debug!(seq, current = state.load_seq, "dropping stale set load");
        return Task::none();
    }
    state.loading = false;

    match result {
        Ok(now) => {
            let audio = now.descriptor.audio_path.clone();
            state.status = format!("{} - {}", now.descriptor.artist, now.descriptor.title);
            state.now_playing = Some(now);
            playback::play_path(state, audio)
        }
        Err(e) => {
            // Prior now-playing state stays untouched; no automatic retry.
            warn!(error = %e, "beatmap load failed");
            state.status = format!("Load error: {e}");
            Task::none()
        }
    }
}

pub(crate) fn shuffle(state: &mut OsuRadio) -> Task<Message> {
    if state.sets.is_empty() {
        state.status = "Nothing to shuffle yet.".to_string();
        return Task::none();
    }

    let index = rand::rng().random_range(0..state.sets.len());
    select_set(state, index)
}

/// Everything disk-touching for one selection, in one background hop:
/// resolve + parse + assemble, then decode the inline cover for display.
fn load_now_playing(root: &Path, name: &str) -> Result<NowPlaying, String> {
    let descriptor =
        core::load_beatmap(root, name, CoverMode::Inline).map_err(|e| e.to_string())?;

    let cover = match &descriptor.cover {
        Some(CoverRef::Inline(uri)) => {
            decode_data_uri(uri).map(iced::widget::image::Handle::from_bytes)
        }
        Some(CoverRef::File(path)) => Some(iced::widget::image::Handle::from_path(path)),
        None => None,
    };

    Ok(NowPlaying {
        set_name: name.to_string(),
        descriptor,
        cover,
    })
}
