//! core/resolve.rs
//! Beatmap set folder resolution.
//!
//! Picks the files that matter out of one set folder: the `.osu` definition,
//! the `.mp3` audio track, and optional cover art. Listing is non-recursive,
//! and only names are looked at; no file contents are read at this stage.
//!
//! Selection is first-match in readdir order, which is filesystem-dependent.
//! That mirrors the shipped behavior and is an accepted limitation (see
//! DESIGN.md); set folders in practice contain one audio file and one cover.

use std::path::Path;

use tracing::debug;

use super::error::CoreError;

/// File names picked out of a beatmap set folder.
///
/// Names, not paths: callers join them back onto the folder they resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSet {
    /// First `.osu` file, if any. Absence is tolerated (metadata falls back
    /// to "Unknown" downstream).
    pub definition: Option<String>,
    /// First `.mp3` file. Required: playback is impossible without it.
    pub audio: String,
    /// First `.jpg` or `.png` file, if any.
    pub cover: Option<String>,
}

/// Resolve the definition, audio, and cover files of one set folder.
pub fn resolve_beatmap_folder(folder: &Path) -> Result<ResolvedSet, CoreError> {
    if folder.as_os_str().is_empty() {
        return Err(CoreError::InvalidInput("empty folder path".to_string()));
    }
    if !folder.is_dir() {
        return Err(CoreError::NotADirectory(folder.to_path_buf()));
    }

    let entries = std::fs::read_dir(folder).map_err(|e| CoreError::io(folder, e))?;

    let mut definition: Option<String> = None;
    let mut audio: Option<String> = None;
    let mut cover: Option<String> = None;

    for entry in entries {
        let entry = entry.map_err(|e| CoreError::io(folder, e))?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };

        if definition.is_none() && has_extension(&name, "osu") {
            definition = Some(name);
        } else if audio.is_none() && has_extension(&name, "mp3") {
            audio = Some(name);
        } else if cover.is_none() && (has_extension(&name, "jpg") || has_extension(&name, "png")) {
            cover = Some(name);
        }
    }

    let Some(audio) = audio else {
        return Err(CoreError::MissingAudio(folder.to_path_buf()));
    };

    debug!(
        folder = %folder.display(),
        ?definition,
        %audio,
        ?cover,
        "resolved beatmap folder"
    );

    Ok(ResolvedSet {
        definition,
        audio,
        cover,
    })
}

pub(crate) fn has_extension(name: &str, ext: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|s| s.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn resolves_definition_audio_and_cover() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "map.osu");
        touch(dir.path(), "audio.mp3");
        touch(dir.path(), "bg.jpg");

        let resolved = resolve_beatmap_folder(dir.path()).unwrap();

        assert_eq!(resolved.definition.as_deref(), Some("map.osu"));
        assert_eq!(resolved.audio, "audio.mp3");
        assert_eq!(resolved.cover.as_deref(), Some("bg.jpg"));
    }

    #[test]
    fn missing_audio_is_a_hard_failure() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "map.osu");

        let err = resolve_beatmap_folder(dir.path()).unwrap_err();
        assert!(matches!(err, CoreError::MissingAudio(_)), "{err}");
    }

    #[test]
    fn missing_definition_and_cover_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "audio.mp3");

        let resolved = resolve_beatmap_folder(dir.path()).unwrap();

        assert_eq!(resolved.definition, None);
        assert_eq!(resolved.cover, None);
    }

    #[test]
    fn empty_path_is_invalid_input() {
        let err = resolve_beatmap_folder(Path::new("")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)), "{err}");
    }

    #[test]
    fn file_path_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "audio.mp3");

        let err = resolve_beatmap_folder(&dir.path().join("audio.mp3")).unwrap_err();
        assert!(matches!(err, CoreError::NotADirectory(_)), "{err}");
    }

    #[test]
    fn missing_folder_is_not_a_directory() {
        let err = resolve_beatmap_folder(&PathBuf::from("/nonexistent/beatmap/set")).unwrap_err();
        assert!(matches!(err, CoreError::NotADirectory(_)), "{err}");
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Audio.MP3");
        touch(dir.path(), "BG.PNG");

        let resolved = resolve_beatmap_folder(dir.path()).unwrap();

        assert_eq!(resolved.audio, "Audio.MP3");
        assert_eq!(resolved.cover.as_deref(), Some("BG.PNG"));
    }
}
