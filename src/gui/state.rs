//! GUI state + messages.
//! Pure data definitions used by update/ and view/.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use crate::core::config::{Settings, Theme, UiVariant};
use crate::core::playback::{PlaybackController, PlayerEvent};
use crate::core::queue::PlayQueue;
use crate::core::types::Track;

/// App state.
///
/// Both UI variants read and mutate this same struct; the variant only
/// decides which view function renders it.
pub(crate) struct Resona {
    pub status: String,
    pub settings: Settings,

    /// The playback backend's bookkeeping half: ordered tracks,
    /// current index, volume/mute.
    pub queue: PlayQueue,

    /// True while a background add/scan is running; add buttons are
    /// disabled meanwhile.
    pub adding: bool,

    // Playback engine bridge. `None` until first playback.
    pub playback: Option<PlaybackController>,
    pub playback_events: Option<RefCell<Receiver<PlayerEvent>>>,

    pub is_playing: bool,
    pub is_paused: bool,
    pub position_ms: u64,
    pub duration_ms: Option<u64>,
    /// While the user drags the seek slider we show the preview and
    /// ignore engine position ticks; commit happens on release.
    pub seek_preview_ratio: Option<f32>,

    /// Queue index the side panel inspects (modern view).
    pub selected: Option<usize>,

    /// Album art of the now-playing track, once loaded.
    pub cover: Option<(PathBuf, iced::widget::image::Handle)>,

    // Text inputs
    pub path_input: String,
    pub playlist_path_input: String,
    pub search_input: String,
}

impl Default for Resona {
    fn default() -> Self {
        Self {
            status: "Add a file or folder to get started.".to_string(),
            settings: Settings::default(),

            queue: PlayQueue::default(),
            adding: false,

            playback: None,
            playback_events: None,

            is_playing: false,
            is_paused: false,
            position_ms: 0,
            duration_ms: None,
            seek_preview_ratio: None,

            selected: None,
            cover: None,

            path_input: String::new(),
            playlist_path_input: String::new(),
            search_input: String::new(),
        }
    }
}

impl Resona {
    /// Cover handle to draw for the now-playing track, if we have it.
    pub fn cover_for_now_playing(&self) -> Option<&iced::widget::image::Handle> {
        let (path, handle) = self.cover.as_ref()?;
        let current = self.queue.current_track()?;
        (current.path == *path).then_some(handle)
    }
}

/// Message = "something happened".
#[derive(Debug, Clone)]
pub(crate) enum Message {
    TickPlayback,

    // Add pipeline
    PathInputChanged(String),
    /// Add a file, or a folder's direct children.
    AddPathPressed,
    /// Add a folder tree, recursively.
    ScanPathPressed,
    AddFinished(Result<(Vec<Track>, usize), String>),
    /// Background tag/duration backfill for paths already in the queue
    /// (playlist load, startup restore).
    MetaLoaded(Result<(Vec<Track>, usize), String>),

    // Queue
    SelectTrack(usize),
    RemoveTrack(usize),
    MoveTrackUp(usize),
    MoveTrackDown(usize),
    ClearQueue,

    // Transport
    PlayTrack(usize),
    TogglePlayPause,
    Stop,
    Next,
    Prev,

    // Seek: preview while dragging, commit on release
    SeekTo(f32),
    SeekCommit,

    SetVolume(f32),
    ToggleMute,

    CoverLoaded(PathBuf, Option<iced::widget::image::Handle>),

    // Playlist files
    PlaylistPathChanged(String),
    SavePlaylistPressed,
    LoadPlaylistPressed,

    // Settings
    SetUiVariant(UiVariant),
    SetTheme(Theme),
    SetResumeOnStart(bool),
    SearchChanged(String),

    Quit,
}
