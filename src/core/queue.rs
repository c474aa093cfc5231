//! core/queue.rs
//! The play queue: an ordered list of tracks plus a current-index
//! pointer, and the volume/mute bookkeeping that travels with it.
//!
//! Invariants:
//! - `current` is 0 when the queue is empty, otherwise `< len`.
//! - `volume` stays within 0.0..=1.0.
//! - Mute never forgets the volume to restore.
//!
//! No audio happens here. The GUI forwards the queue's decisions to the
//! playback engine as `PlayerCommand`s.

use std::path::PathBuf;

use super::library::is_audio_file;
use super::types::Track;

pub const DEFAULT_VOLUME: f32 = 0.7;

/// Result of removing an entry, so the caller knows whether the track
/// being played just vanished out from under it.
#[derive(Debug, PartialEq)]
pub enum Removed {
    /// The removed entry was the current one; stop playback.
    Current(Track),
    Other(Track),
}

pub struct PlayQueue {
    tracks: Vec<Track>,
    current: usize,

    volume: f32,
    muted: bool,
    last_volume: f32,
}

impl Default for PlayQueue {
    fn default() -> Self {
        Self {
            tracks: Vec::new(),
            current: 0,
            volume: DEFAULT_VOLUME,
            muted: false,
            last_volume: DEFAULT_VOLUME,
        }
    }
}

impl PlayQueue {
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.tracks.iter().map(|t| t.path.clone()).collect()
    }

    /// Append paths that exist on disk and carry a supported audio
    /// extension. Returns how many were accepted; the rest are skipped.
    pub fn add_files<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut added = 0;
        for path in paths {
            if path.is_file() && is_audio_file(&path) {
                self.tracks.push(Track::bare(path));
                added += 1;
            }
        }
        added
    }

    /// Replace the whole queue (playlist load). Pointer resets to 0.
    pub fn replace<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.tracks.clear();
        self.current = 0;
        self.add_files(paths)
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
        self.current = 0;
    }

    /// Remove one entry, keeping the pointer aimed at the same track
    /// where possible:
    /// - removing below the pointer shifts it down one
    /// - removing the pointed-at entry clamps it to the new last index
    pub fn remove(&mut self, index: usize) -> Option<Removed> {
        if index >= self.tracks.len() {
            return None;
        }

        let track = self.tracks.remove(index);

        if index < self.current {
            self.current -= 1;
            Some(Removed::Other(track))
        } else if index == self.current {
            if self.tracks.is_empty() {
                self.current = 0;
            } else {
                self.current = self.current.min(self.tracks.len() - 1);
            }
            Some(Removed::Current(track))
        } else {
            Some(Removed::Other(track))
        }
    }

    /// Swap with the previous entry. The pointer follows whichever of
    /// the pair it was on.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.tracks.len() {
            return false;
        }
        self.tracks.swap(index - 1, index);

        if self.current == index {
            self.current = index - 1;
        } else if self.current == index - 1 {
            self.current = index;
        }
        true
    }

    /// Swap with the next entry. Same pointer-following rule.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.tracks.len() {
            return false;
        }
        self.tracks.swap(index, index + 1);

        if self.current == index {
            self.current = index + 1;
        } else if self.current == index + 1 {
            self.current = index;
        }
        true
    }

    pub fn set_current(&mut self, index: usize) -> bool {
        if index < self.tracks.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Index of the track after the current one, wrapping at the end.
    pub fn next_index(&self) -> Option<usize> {
        if self.tracks.is_empty() {
            return None;
        }
        Some((self.current + 1) % self.tracks.len())
    }

    /// Index of the track before the current one, wrapping at 0.
    pub fn prev_index(&self) -> Option<usize> {
        if self.tracks.is_empty() {
            return None;
        }
        Some(if self.current == 0 {
            self.tracks.len() - 1
        } else {
            self.current - 1
        })
    }

    /// Backfill metadata from a background tag read. Entries are matched
    /// by path, so this stays correct even if the queue was reordered
    /// while the fetch ran.
    pub fn apply_meta(&mut self, rows: Vec<Track>) {
        for row in rows {
            for t in self.tracks.iter_mut().filter(|t| t.path == row.path) {
                t.title = row.title.clone();
                t.artist = row.artist.clone();
                t.album = row.album.clone();
                t.duration_ms = row.duration_ms;
            }
        }
    }

    // Volume / mute

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Volume the mixer should actually run at.
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if !self.muted {
            self.last_volume = self.volume;
        }
    }

    /// Flip mute. Returns the new effective volume to forward to the
    /// mixer. Unmute restores the last audible volume.
    pub fn toggle_mute(&mut self) -> f32 {
        if self.muted {
            self.muted = false;
            self.volume = self.last_volume;
        } else {
            self.last_volume = self.volume;
            self.muted = true;
        }
        self.effective_volume()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn temp_files(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
        names
            .iter()
            .map(|n| {
                let p = dir.join(n);
                fs::write(&p, b"x").unwrap();
                p
            })
            .collect()
    }

    /// Queue with N fake entries, bypassing the on-disk checks.
    fn queue_of(n: usize) -> PlayQueue {
        let mut q = PlayQueue::default();
        for i in 0..n {
            q.tracks.push(Track::bare(PathBuf::from(format!("{i}.mp3"))));
        }
        q
    }

    #[test]
    fn starts_empty_at_default_volume() {
        let q = PlayQueue::default();
        assert!(q.is_empty());
        assert_eq!(q.current_index(), 0);
        assert_eq!(q.volume(), DEFAULT_VOLUME);
        assert!(!q.muted());
    }

    #[test]
    fn add_files_skips_missing_and_unsupported() {
        let tmp = tempfile::tempdir().unwrap();
        let mut paths = temp_files(tmp.path(), &["a.mp3", "b.wav", "notes.txt"]);
        paths.push(tmp.path().join("ghost.mp3"));

        let mut q = PlayQueue::default();
        assert_eq!(q.add_files(paths), 2);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn replace_resets_pointer() {
        let tmp = tempfile::tempdir().unwrap();
        let first = temp_files(tmp.path(), &["a.mp3", "b.mp3", "c.mp3"]);
        let second = temp_files(tmp.path(), &["d.mp3"]);

        let mut q = PlayQueue::default();
        q.add_files(first);
        q.set_current(2);

        assert_eq!(q.replace(second), 1);
        assert_eq!(q.len(), 1);
        assert_eq!(q.current_index(), 0);
    }

    #[test]
    fn remove_below_pointer_shifts_it_down() {
        let mut q = queue_of(3);
        q.set_current(2);

        let removed = q.remove(0).unwrap();
        assert!(matches!(removed, Removed::Other(_)));
        assert_eq!(q.current_index(), 1);
        assert_eq!(q.current_track().unwrap().path, PathBuf::from("2.mp3"));
    }

    #[test]
    fn remove_current_clamps_pointer() {
        let mut q = queue_of(3);
        q.set_current(2);

        let removed = q.remove(2).unwrap();
        assert!(matches!(removed, Removed::Current(_)));
        assert_eq!(q.current_index(), 1);

        // Draining the rest ends with an empty queue pointing at 0.
        q.remove(1);
        q.remove(0);
        assert!(q.is_empty());
        assert_eq!(q.current_index(), 0);
    }

    #[test]
    fn remove_above_pointer_leaves_it_alone() {
        let mut q = queue_of(3);
        q.set_current(0);

        q.remove(2);
        assert_eq!(q.current_index(), 0);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut q = queue_of(2);
        assert!(q.remove(5).is_none());
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn moves_follow_the_pointer() {
        let mut q = queue_of(3);
        q.set_current(1);

        assert!(q.move_up(1));
        assert_eq!(q.current_index(), 0);
        assert_eq!(q.tracks()[0].path, PathBuf::from("1.mp3"));

        assert!(q.move_down(0));
        assert_eq!(q.current_index(), 1);

        // Swapping the other entry of the pair drags the pointer too.
        q.set_current(0);
        assert!(q.move_down(0));
        assert_eq!(q.current_index(), 1);
    }

    #[test]
    fn moves_at_the_edges_do_nothing() {
        let mut q = queue_of(2);
        assert!(!q.move_up(0));
        assert!(!q.move_down(1));
        assert!(!q.move_down(7));
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut q = queue_of(3);
        q.set_current(2);
        assert_eq!(q.next_index(), Some(0));

        q.set_current(0);
        assert_eq!(q.prev_index(), Some(2));

        let empty = PlayQueue::default();
        assert_eq!(empty.next_index(), None);
        assert_eq!(empty.prev_index(), None);
    }

    #[test]
    fn volume_clamps() {
        let mut q = PlayQueue::default();
        q.set_volume(0.5);
        assert_eq!(q.volume(), 0.5);
        q.set_volume(-0.5);
        assert_eq!(q.volume(), 0.0);
        q.set_volume(1.5);
        assert_eq!(q.volume(), 1.0);
    }

    #[test]
    fn mute_restores_last_audible_volume() {
        let mut q = PlayQueue::default();
        q.set_volume(0.4);

        assert_eq!(q.toggle_mute(), 0.0);
        assert!(q.muted());
        assert_eq!(q.effective_volume(), 0.0);

        assert_eq!(q.toggle_mute(), 0.4);
        assert!(!q.muted());
        assert_eq!(q.volume(), 0.4);
    }

    #[test]
    fn apply_meta_matches_by_path() {
        let mut q = queue_of(2);

        let mut row = Track::bare(PathBuf::from("1.mp3"));
        row.title = Some("Song".into());
        row.duration_ms = Some(180_000);

        q.apply_meta(vec![row]);
        assert_eq!(q.tracks()[1].title.as_deref(), Some("Song"));
        assert_eq!(q.tracks()[1].duration_ms, Some(180_000));
        assert_eq!(q.tracks()[0].title, None);
    }
}
