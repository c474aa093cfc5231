//! core/tags/read.rs
//! Read ID3 tags + probe duration for one file and build a `Track`.

use std::path::PathBuf;

use id3::{Tag, TagLike};

use super::super::types::Track;
use super::duration::probe_duration_ms;

/// Returns (track, tag_read_failed).
///
/// The bool only reports the *tag* read: a WAV with no ID3 chunk counts
/// as a failure for the status line, but the duration probe still runs
/// and the track is still usable.
pub fn read_track_row(path: PathBuf) -> (Track, bool) {
    let duration_ms = probe_duration_ms(&path);

    match Tag::read_from_path(&path) {
        Ok(tag) => {
            let track = Track {
                path,
                title: tag.title().map(str::to_owned),
                artist: tag.artist().map(str::to_owned),
                album: tag.album().map(str::to_owned),
                duration_ms,
            };
            (track, false)
        }
        Err(_) => {
            let mut track = Track::bare(path);
            track.duration_ms = duration_ms;
            (track, true)
        }
    }
}

/// Read rows for a batch of paths. Per-file failures are counted, never
/// fatal. Returns (rows, tag_failures).
pub fn read_track_rows(paths: Vec<PathBuf>) -> (Vec<Track>, usize) {
    let mut rows = Vec::with_capacity(paths.len());
    let mut failures = 0;

    for path in paths {
        let (row, failed) = read_track_row(path);
        if failed {
            failures += 1;
        }
        rows.push(row);
    }

    (rows, failures)
}
