//! gui/update/persist.rs
//! Playlist save/load, settings changes, quit.
//!
//! Playlist files are tiny, so they are written synchronously; the
//! heavy part of a load (re-reading tags) goes through the same
//! background add pipeline as everything else.

use std::path::PathBuf;

use iced::Task;

use crate::core::config::{Theme, UiVariant};
use crate::core::playback::PlayerCommand;
use crate::core::playlistfile;
use crate::core::tags::read_track_rows;

use super::super::state::{Message, Resona};
use super::spawn_blocking;

/// Mirror the queue into settings and write them out. Failures only
/// reach the status line; losing a settings write never breaks playback.
pub(crate) fn sync_and_save(state: &mut Resona) {
    state.settings.volume = state.queue.volume();
    state.settings.last_playlist = state.queue.paths();
    state.settings.last_index = state.queue.current_index();

    if let Err(e) = state.settings.save() {
        state.status = format!("Could not save settings: {e}");
    }
}

pub(crate) fn save_playlist(state: &mut Resona) -> Task<Message> {
    if state.queue.is_empty() {
        state.status = "Queue is empty, nothing to save.".into();
        return Task::none();
    }

    let input = state.playlist_path_input.trim();
    if input.is_empty() {
        state.status = "Type a playlist path first (.json or .m3u).".into();
        return Task::none();
    }

    let path = PathBuf::from(input);
    match playlistfile::save(&path, &state.queue.paths()) {
        Ok(()) => {
            state.status = format!("Saved playlist: {}", path.display());
        }
        Err(e) => {
            state.status = format!("Could not save playlist: {e}");
        }
    }

    Task::none()
}

pub(crate) fn load_playlist(state: &mut Resona) -> Task<Message> {
    if state.adding {
        return Task::none();
    }

    let input = state.playlist_path_input.trim();
    if input.is_empty() {
        state.status = "Type a playlist path first (.json or .m3u).".into();
        return Task::none();
    }

    let path = PathBuf::from(input);
    let paths = match playlistfile::load(&path) {
        Ok(p) => p,
        Err(e) => {
            state.status = format!("Could not load playlist: {e}");
            return Task::none();
        }
    };

    // Replacing the queue invalidates whatever was playing.
    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::Stop);
    }
    state.is_playing = false;
    state.is_paused = false;
    state.position_ms = 0;
    state.duration_ms = None;
    state.selected = None;
    state.cover = None;

    // Missing files are dropped by the queue's add filter.
    let loaded = state.queue.replace(paths);
    state.status = format!("Loaded {loaded} tracks from {}", path.display());
    sync_and_save(state);

    // Backfill tags/durations off-thread.
    let queued = state.queue.paths();
    state.adding = true;
    Task::perform(
        spawn_blocking(move || Ok(read_track_rows(queued))),
        Message::MetaLoaded,
    )
}

pub(crate) fn set_ui_variant(state: &mut Resona, variant: UiVariant) -> Task<Message> {
    state.settings.ui = variant;
    sync_and_save(state);
    Task::none()
}

pub(crate) fn set_theme(state: &mut Resona, theme: Theme) -> Task<Message> {
    state.settings.theme = theme;
    sync_and_save(state);
    Task::none()
}

pub(crate) fn set_resume_on_start(state: &mut Resona, value: bool) -> Task<Message> {
    state.settings.resume_on_start = value;
    sync_and_save(state);
    Task::none()
}

pub(crate) fn quit(state: &mut Resona) -> Task<Message> {
    sync_and_save(state);

    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::Shutdown);
    }

    iced::exit()
}
