//! Core data types shared between core logic and the UI.
//!
//! These structs are boring bags of data on purpose:
//! - no GUI code
//! - no filesystem code
//! - no tag parsing code

use std::path::PathBuf;

/// One entry in the play queue: a file on disk plus whatever
/// metadata we managed to read for it.
///
/// Metadata is `Option` because tags are frequently missing or
/// unreadable; the UI substitutes fallbacks ("Unknown Artist", the
/// filename stem) instead of crashing.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Full file path on disk. The only field we always have.
    pub path: PathBuf,

    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,

    /// Total length in milliseconds, when the container told us.
    pub duration_ms: Option<u64>,
}

impl Track {
    /// A track with no metadata yet. Tags/duration are filled in by a
    /// background fetch after the path lands in the queue.
    pub fn bare(path: PathBuf) -> Self {
        Self {
            path,
            title: None,
            artist: None,
            album: None,
            duration_ms: None,
        }
    }
}
