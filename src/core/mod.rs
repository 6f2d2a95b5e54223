//! core/mod.rs
//!
//! The brain of the app:
//! - Enumerate beatmap set folders under the songs root
//! - Resolve the files inside one set (`.osu` / `.mp3` / cover art)
//! - Parse the definition file's metadata section
//! - Assemble a normalized descriptor for the GUI to render
//! - Decode and play the audio track
//!
//! The extraction pipeline is explicit and modular:
//!   (A) list_beatmap_sets(root)              -> Vec<String>
//!   (B) resolve_beatmap_folder(folder)       -> ResolvedSet
//!   (C) assemble_descriptor(folder, set, ..) -> BeatmapDescriptor
//!
//! Every call is a pure function of its filesystem inputs: no shared state,
//! no caching, no retries. A read either succeeds or the operation fails.
//! This keeps the GUI dumb; it only ever sees plain data structs.

pub mod descriptor;
pub mod error;
pub mod library;
pub mod osu;
pub mod playback;
pub mod resolve;
pub mod types;

use std::path::Path;

pub use error::CoreError;
pub use library::list_beatmap_sets;

use types::{BeatmapDescriptor, CoverMode};

/// Convenience: resolve one set folder under `root` and assemble its
/// descriptor. This is what selecting a set in the UI calls.
///
/// Failure surfaces as a structured [`CoreError`]; a folder without the
/// required `.mp3` never produces a descriptor.
pub fn load_beatmap(
    root: &Path,
    set_name: &str,
    cover_mode: CoverMode,
) -> Result<BeatmapDescriptor, CoreError> {
    let folder = root.join(set_name);
    let resolved = resolve::resolve_beatmap_folder(&folder)?;
    descriptor::assemble_descriptor(&folder, &resolved, cover_mode)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use pretty_assertions::assert_eq;

    use super::types::CoverRef;
    use super::*;

    #[test]
    fn load_beatmap_end_to_end() {
        let root = tempfile::tempdir().unwrap();
        let set_name = "Artist - Title (mapper) [Diff]";
        let folder = root.path().join(set_name);
        fs::create_dir(&folder).unwrap();

        fs::write(
            folder.join("map.osu"),
            "osu file format v14\n\n[General]\nAudioFilename: audio.mp3\n\n[Metadata]\nTitle: Title\nArtist: Artist\nCreator: mapper\n\n[Difficulty]\nHPDrainRate: 5\n",
        )
        .unwrap();
        fs::write(folder.join("audio.mp3"), b"not really mp3").unwrap();
        fs::write(folder.join("bg.jpg"), b"not really jpeg").unwrap();

        let d = load_beatmap(root.path(), set_name, CoverMode::Inline).unwrap();

        assert_eq!(d.artist, "Artist");
        assert_eq!(d.title, "Title");
        assert_eq!(d.audio_path, folder.join("audio.mp3"));

        let Some(CoverRef::Inline(uri)) = d.cover else {
            panic!("expected inline cover, got {:?}", d.cover);
        };
        let payload = uri.strip_prefix("data:image/jpeg;base64,").unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), b"not really jpeg");
    }

    #[test]
    fn load_beatmap_without_audio_fails() {
        let root = tempfile::tempdir().unwrap();
        let folder = root.path().join("set");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("map.osu"), "[Metadata]\nTitle: t\n").unwrap();

        let err = load_beatmap(root.path(), "set", CoverMode::Inline).unwrap_err();
        assert!(matches!(err, CoreError::MissingAudio(_)), "{err}");
    }

    #[test]
    fn load_beatmap_missing_set_fails() {
        let root = tempfile::tempdir().unwrap();

        let err = load_beatmap(root.path(), "no such set", CoverMode::Inline).unwrap_err();
        assert!(matches!(err, CoreError::NotADirectory(_)), "{err}");
    }
}
