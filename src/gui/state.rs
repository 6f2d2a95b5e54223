//! GUI state + messages.
//! Pure data definitions used by update + view.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use crate::core::playback::{PlaybackController, PlayerEvent};
use crate::core::types::BeatmapDescriptor;

/// One loaded "now playing" entry: the assembled descriptor plus the cover
/// already decoded into an iced image handle.
#[derive(Debug, Clone)]
pub(crate) struct NowPlaying {
    pub set_name: String,
    pub descriptor: BeatmapDescriptor,
    pub cover: Option<iced::widget::image::Handle>,
}

/// App state.
pub(crate) struct OsuRadio {
    pub status: String,

    // Songs root
    /// True while the native folder dialog is open.
    pub picking: bool,
    pub songs_root: Option<PathBuf>,
    /// Subdirectory names under the songs root. Never parsed until selected.
    pub sets: Vec<String>,

    // Selection + load
    pub selected: Option<usize>,
    pub loading: bool,
    /// Monotonic id for set loads. A finished load carrying a stale id was
    /// superseded by a newer click and is dropped on arrival.
    pub load_seq: u64,

    pub now_playing: Option<NowPlaying>,

    // Playback (engine handles live here; the GUI never touches rodio)
    pub playback: Option<PlaybackController>,
    pub playback_events: Option<RefCell<Receiver<PlayerEvent>>>,
    pub is_playing: bool,
    pub position_ms: u64,
    pub duration_ms: Option<u64>,
    /// While the user drags the seek slider: the previewed ratio (0..=1).
    pub seek_preview_ratio: Option<f32>,
    pub volume: f32,
}

impl Default for OsuRadio {
    fn default() -> Self {
        Self {
            status: "Pick your osu! Songs folder.".to_string(),

            picking: false,
            songs_root: None,
            sets: Vec::new(),

            selected: None,
            loading: false,
            load_seq: 0,

            now_playing: None,

            playback: None,
            playback_events: None,
            is_playing: false,
            position_ms: 0,
            duration_ms: None,
            seek_preview_ratio: None,
            volume: 0.7,
        }
    }
}

/// Message = "something happened".
#[derive(Debug, Clone)]
pub(crate) enum Message {
    TickPlayback,

    // Songs root
    PickFolder,
    FolderPicked(Option<PathBuf>),
    SetsListed(Result<Vec<String>, String>),

    // Set selection + load
    SelectSet(usize),
    /// Background load finished; first field is the load sequence id.
    SetLoaded(u64, Result<NowPlaying, String>),
    Shuffle,

    // Playback transport
    TogglePlayPause,
    Stop,
    /// Seek slider moved: preview only (ratio 0..=1).
    SeekTo(f32),
    /// Seek slider released: commit the previewed position to the engine.
    SeekCommit,
    SetVolume(f32),
}
