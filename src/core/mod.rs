//! core/mod.rs
//!
//! Everything the player does that is not drawing widgets:
//! - discover audio files (filesystem walk)
//! - read tags / artwork / durations (metadata IO)
//! - keep the play queue and its index arithmetic
//! - run the playback engine (rodio, own thread)
//! - persist settings and playlist files
//!
//! The add pipeline is explicit and modular:
//!   (A) collect_paths -> Vec<PathBuf>
//!   (B) tags::read_track_rows -> (Vec<Track>, failures)
//! The GUI stays dumb: it runs (A)+(B) on a worker thread and applies
//! the result to the queue when the message comes back.

pub mod config;
pub mod library;
pub mod playback;
pub mod playlistfile;
pub mod queue;
pub mod tags;
pub mod types;

use std::path::{Path, PathBuf};

/// Expand one user-entered path into playable file paths.
///
/// - a file: accepted if it has a supported extension
/// - a directory: its audio files, recursive or not
pub fn collect_paths(input: &Path, recursive: bool) -> Result<Vec<PathBuf>, String> {
    if input.is_file() {
        if library::is_audio_file(input) {
            return Ok(vec![input.to_path_buf()]);
        }
        return Err(format!("Not an audio file: {}", input.display()));
    }

    if input.is_dir() {
        return if recursive {
            library::walk_audio_files(input)
        } else {
            library::list_audio_files(input)
        };
    }

    Err(format!("No such file or folder: {}", input.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn collect_accepts_single_audio_file() {
        let tmp = tempfile::tempdir().unwrap();
        let song = tmp.path().join("song.mp3");
        fs::write(&song, b"x").unwrap();

        assert_eq!(collect_paths(&song, false).unwrap(), vec![song]);
    }

    #[test]
    fn collect_rejects_non_audio_file_and_missing_path() {
        let tmp = tempfile::tempdir().unwrap();
        let txt = tmp.path().join("readme.txt");
        fs::write(&txt, b"x").unwrap();

        assert!(collect_paths(&txt, false).is_err());
        assert!(collect_paths(&tmp.path().join("ghost"), false).is_err());
    }

    #[test]
    fn collect_dir_respects_recursive_flag() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("top.mp3"), b"x").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/deep.mp3"), b"x").unwrap();

        assert_eq!(collect_paths(tmp.path(), false).unwrap().len(), 1);
        assert_eq!(collect_paths(tmp.path(), true).unwrap().len(), 2);
    }
}
