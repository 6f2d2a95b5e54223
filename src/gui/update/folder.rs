//! gui/update/folder.rs
//! Songs-root lifecycle: native folder picker + set listing.
//!
//! Both steps run off-thread; the dialog blocks its thread while open and
//! listing a large Songs folder can be slow on first touch.

use std::path::PathBuf;

use iced::Task;
use tracing::info;

use super::super::state::{Message, OsuRadio};
use super::playback;
use super::util::spawn_blocking;
use crate::core;

pub(crate) fn pick_folder(state: &mut OsuRadio) -> Task<Message> {
    if state.picking {
        return Task::none();
    }

    state.picking = true;
    state.status = "Waiting for folder pick...".to_string();

    Task::perform(
        spawn_blocking(|| {
            rfd::FileDialog::new()
                .set_title("Pick your osu! Songs folder")
                .pick_folder()
        }),
        Message::FolderPicked,
    )
}

pub(crate) fn folder_picked(state: &mut OsuRadio, picked: Option<PathBuf>) -> Task<Message> {
    state.picking = false;

    let Some(root) = picked else {
        state.status = "Folder pick cancelled.".to_string();
        return Task::none();
    };

    info!(root = %root.display(), "songs root picked");
    state.songs_root = Some(root.clone());
    state.status = format!("Listing {}", root.display());

    Task::perform(
        spawn_blocking(move || core::list_beatmap_sets(&root).map_err(|e| e.to_string())),
        Message::SetsListed,
    )
}

pub(crate) fn sets_listed(
    state: &mut OsuRadio,
    result: Result<Vec<String>, String>,
) -> Task<Message> {
    match result {
        Ok(sets) => {
            state.status = format!("{} beatmap sets", sets.len());
            state.sets = sets;

            // New root = old selection and now-playing entry are invalid.
            state.selected = None;
            state.now_playing = None;
            playback::stop(state)
        }
        Err(e) => {
            // Keep the previous list; just report.
            state.status = format!("List error: {e}");
            Task::none()
        }
    }
}
