//! core/descriptor.rs
//! Descriptor assembly: parser output + resolved file names -> one
//! [`BeatmapDescriptor`].
//!
//! This is the only stage that reads file contents. Nothing is cached:
//! re-assembling the same set re-reads and re-parses from disk every time.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, warn};

use super::error::CoreError;
use super::osu;
use super::resolve::{ResolvedSet, has_extension};
use super::types::{BeatmapDescriptor, CoverMode, CoverRef};

/// Fallback for a missing definition file, a missing key, or a value that
/// trims to nothing.
const UNKNOWN: &str = "Unknown";

/// Build the normalized descriptor for one resolved set folder.
///
/// Fails only on I/O: a folder that resolved successfully but whose
/// definition or cover file cannot be read surfaces a [`CoreError::Io`].
/// Missing metadata never fails; it falls back to `"Unknown"`.
pub fn assemble_descriptor(
    folder: &Path,
    resolved: &ResolvedSet,
    cover_mode: CoverMode,
) -> Result<BeatmapDescriptor, CoreError> {
    let (artist, title) = match &resolved.definition {
        Some(name) => {
            let path = folder.join(name);
            let text = std::fs::read_to_string(&path).map_err(|e| CoreError::io(&path, e))?;
            let metadata = osu::parse_metadata(&text);
            (
                field_or_unknown(metadata.get("Artist")),
                field_or_unknown(metadata.get("Title")),
            )
        }
        None => {
            warn!(folder = %folder.display(), "no .osu definition file, using Unknown");
            (UNKNOWN.to_string(), UNKNOWN.to_string())
        }
    };

    let audio_path = folder.join(&resolved.audio);

    let cover = match &resolved.cover {
        Some(name) => {
            let path = folder.join(name);
            Some(match cover_mode {
                CoverMode::Inline => {
                    let bytes = std::fs::read(&path).map_err(|e| CoreError::io(&path, e))?;
                    CoverRef::Inline(data_uri(name, &bytes))
                }
                CoverMode::Reference => CoverRef::File(path),
            })
        }
        None => None,
    };

    debug!(%artist, %title, audio = %audio_path.display(), "assembled descriptor");

    Ok(BeatmapDescriptor {
        artist,
        title,
        audio_path,
        cover,
    })
}

fn field_or_unknown(value: Option<&String>) -> String {
    match value.map(|v| v.trim()) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

/// Image kind is decided purely by extension: `.png` -> `image/png`,
/// anything else the resolver accepted is `.jpg` -> `image/jpeg`.
fn data_uri(name: &str, bytes: &[u8]) -> String {
    let mime = if has_extension(name, "png") {
        "image/png"
    } else {
        "image/jpeg"
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::super::resolve::resolve_beatmap_folder;
    use super::*;

    fn resolve(dir: &Path) -> ResolvedSet {
        resolve_beatmap_folder(dir).unwrap()
    }

    #[test]
    fn missing_artist_key_falls_back_to_unknown() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("map.osu"),
            "[Metadata]\nTitle: Freedom Dive\n",
        )
        .unwrap();
        fs::write(dir.path().join("audio.mp3"), b"mp3").unwrap();

        let d = assemble_descriptor(dir.path(), &resolve(dir.path()), CoverMode::Inline).unwrap();

        assert_eq!(d.artist, "Unknown");
        assert_eq!(d.title, "Freedom Dive");
        assert_eq!(d.audio_path, dir.path().join("audio.mp3"));
        assert_eq!(d.cover, None);
    }

    #[test]
    fn no_definition_file_means_unknown_without_parsing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("audio.mp3"), b"mp3").unwrap();

        let d = assemble_descriptor(dir.path(), &resolve(dir.path()), CoverMode::Inline).unwrap();

        assert_eq!(d.artist, "Unknown");
        assert_eq!(d.title, "Unknown");
    }

    #[test]
    fn blank_metadata_values_fall_back_to_unknown() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("map.osu"), "[Metadata]\nArtist:   \n").unwrap();
        fs::write(dir.path().join("audio.mp3"), b"mp3").unwrap();

        let d = assemble_descriptor(dir.path(), &resolve(dir.path()), CoverMode::Inline).unwrap();

        assert_eq!(d.artist, "Unknown");
    }

    #[test]
    fn png_cover_becomes_a_png_data_uri_of_the_same_bytes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("audio.mp3"), b"mp3").unwrap();
        let bytes: Vec<u8> = (0u8..=255).collect();
        fs::write(dir.path().join("bg.png"), &bytes).unwrap();

        let d = assemble_descriptor(dir.path(), &resolve(dir.path()), CoverMode::Inline).unwrap();

        let Some(CoverRef::Inline(uri)) = d.cover else {
            panic!("expected inline cover, got {:?}", d.cover);
        };
        let payload = uri.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), bytes);
    }

    #[test]
    fn jpg_cover_uses_the_jpeg_mime() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("audio.mp3"), b"mp3").unwrap();
        fs::write(dir.path().join("bg.jpg"), b"jpeg bytes").unwrap();

        let d = assemble_descriptor(dir.path(), &resolve(dir.path()), CoverMode::Inline).unwrap();

        let Some(CoverRef::Inline(uri)) = d.cover else {
            panic!("expected inline cover, got {:?}", d.cover);
        };
        assert!(uri.starts_with("data:image/jpeg;base64,"), "{uri}");
    }

    #[test]
    fn reference_mode_hands_back_the_cover_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("audio.mp3"), b"mp3").unwrap();
        fs::write(dir.path().join("bg.png"), b"png").unwrap();

        let d =
            assemble_descriptor(dir.path(), &resolve(dir.path()), CoverMode::Reference).unwrap();

        assert_eq!(d.cover, Some(CoverRef::File(dir.path().join("bg.png"))));
    }
}
