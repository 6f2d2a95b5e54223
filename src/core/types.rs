//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be boring bags of data
//! - No GUI code
//! - No filesystem code
//! - No parsing code
//!
//! That keeps them easy to display, easy to log, and easy to unit test.

use std::path::PathBuf;

/// How the assembler hands back cover art.
///
/// `Inline` matches the shipped behavior: a self-contained data URI, so the
/// consumer never needs a second read to show the image. `Reference` hands
/// back the file path instead, which keeps alternative frontends (and tests)
/// free of base64 round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverMode {
    #[default]
    Inline,
    Reference,
}

/// Cover art reference carried by a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverRef {
    /// `data:image/png;base64,...` or `data:image/jpeg;base64,...`
    Inline(String),
    /// Full path to the cover file inside the set folder.
    File(PathBuf),
}

/// Normalized, UI-ready summary of one beatmap set.
///
/// Invariants:
/// - `artist` and `title` are never empty ("Unknown" fallback applied)
/// - `audio_path` always points at a resolved `.mp3`: a folder without an
///   audio track never produces a descriptor in the first place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeatmapDescriptor {
    pub artist: String,
    pub title: String,
    pub audio_path: PathBuf,
    pub cover: Option<CoverRef>,
}
