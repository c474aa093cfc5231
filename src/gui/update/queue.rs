//! gui/update/queue.rs
//! Queue edits: select, remove, reorder, clear.
//!
//! `PlayQueue` owns the index arithmetic; this module keeps the UI
//! selection in step and stops the engine when the playing track is
//! pulled out from under it.

use iced::Task;

use crate::core::playback::PlayerCommand;
use crate::core::queue::Removed;

use super::super::state::{Message, Resona};
use super::persist::sync_and_save;

pub(crate) fn select_track(state: &mut Resona, index: usize) -> Task<Message> {
    if index < state.queue.len() {
        state.selected = Some(index);
    }
    Task::none()
}

pub(crate) fn remove_track(state: &mut Resona, index: usize) -> Task<Message> {
    let Some(removed) = state.queue.remove(index) else {
        return Task::none();
    };

    // Selection shifts the same way the queue pointer does.
    state.selected = match state.selected {
        Some(s) if s == index => None,
        Some(s) if s > index => Some(s - 1),
        other => other,
    };

    match removed {
        Removed::Current(track) => {
            if state.is_playing || state.is_paused {
                if let Some(controller) = &state.playback {
                    controller.send(PlayerCommand::Stop);
                }
                state.is_playing = false;
                state.is_paused = false;
                state.position_ms = 0;
                state.seek_preview_ratio = None;
            }
            state.status = format!("Removed (was playing): {}", track.path.display());
        }
        Removed::Other(track) => {
            state.status = format!("Removed: {}", track.path.display());
        }
    }

    sync_and_save(state);
    Task::none()
}

pub(crate) fn move_track_up(state: &mut Resona, index: usize) -> Task<Message> {
    if state.queue.move_up(index) {
        state.selected = follow_swap(state.selected, index - 1, index);
        sync_and_save(state);
    }
    Task::none()
}

pub(crate) fn move_track_down(state: &mut Resona, index: usize) -> Task<Message> {
    if state.queue.move_down(index) {
        state.selected = follow_swap(state.selected, index, index + 1);
        sync_and_save(state);
    }
    Task::none()
}

pub(crate) fn clear_queue(state: &mut Resona) -> Task<Message> {
    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::Stop);
    }

    state.queue.clear();
    state.selected = None;
    state.cover = None;
    state.is_playing = false;
    state.is_paused = false;
    state.position_ms = 0;
    state.duration_ms = None;
    state.seek_preview_ratio = None;
    state.status = "Queue cleared.".into();

    sync_and_save(state);
    Task::none()
}

fn follow_swap(selected: Option<usize>, a: usize, b: usize) -> Option<usize> {
    match selected {
        Some(s) if s == a => Some(b),
        Some(s) if s == b => Some(a),
        other => other,
    }
}
