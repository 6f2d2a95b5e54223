//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, OsuRadio};

mod folder;
mod playback;
mod selection;
mod util;

pub(crate) fn update(state: &mut OsuRadio, message: Message) -> Task<Message> {
    match message {
        Message::TickPlayback => playback::drain_events(state),

        // Songs root
        Message::PickFolder => folder::pick_folder(state),
        Message::FolderPicked(path) => folder::folder_picked(state, path),
        Message::SetsListed(result) => folder::sets_listed(state, result),

        // Set selection + load
        Message::SelectSet(i) => selection::select_set(state, i),
        Message::SetLoaded(seq, result) => selection::set_loaded(state, seq, result),
        Message::Shuffle => selection::shuffle(state),

        // Playback transport
        Message::TogglePlayPause => playback::toggle_play_pause(state),
        Message::Stop => playback::stop(state),
        Message::SeekTo(ratio) => playback::seek_preview(state, ratio),
        Message::SeekCommit => playback::seek_commit(state),
        Message::SetVolume(vol) => playback::set_volume(state, vol),
    }
}
