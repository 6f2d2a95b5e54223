//! core/error.rs
//! Error taxonomy for the extraction pipeline.
//!
//! Only two classes of failure ever reach the caller:
//! - invalid input (empty path)
//! - not found (missing folder, missing required audio track, failed reads)
//!
//! Malformed-but-tolerated conditions (garbled metadata section, missing
//! definition file, missing cover art) never show up here; they manifest as
//! fallback values in the assembled descriptor instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Empty or otherwise unusable path supplied by the caller.
    #[error("invalid path: {0}")]
    InvalidInput(String),

    /// The supplied path does not exist or is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A beatmap set folder without an `.mp3` cannot be played at all,
    /// so it never produces a descriptor.
    #[error("missing required .mp3 audio track in {}", .0.display())]
    MissingAudio(PathBuf),

    /// Listing or reading failed mid-pipeline (permissions, disk errors).
    /// Callers treat this the same as "not found": report and move on.
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CoreError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
