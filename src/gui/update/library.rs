//! gui/update/library.rs
//! Add files/folders to the queue.
//!
//! Discovery and tag reading run on a worker thread; the queue is only
//! touched when `AddFinished` comes back, so the UI never blocks on
//! disk IO. Tracks appear with metadata already attached.

use std::path::PathBuf;

use iced::Task;

use crate::core;
use crate::core::types::Track;

use super::super::state::{Message, Resona};
use super::persist::sync_and_save;
use super::spawn_blocking;

pub(crate) fn add_path(state: &mut Resona, recursive: bool) -> Task<Message> {
    if state.adding {
        return Task::none();
    }

    let input = state.path_input.trim();
    if input.is_empty() {
        state.status = "Type a file or folder path first.".into();
        return Task::none();
    }

    let path = PathBuf::from(input);

    state.adding = true;
    state.status = if recursive {
        format!("Scanning {}...", path.display())
    } else {
        format!("Adding {}...", path.display())
    };

    Task::perform(
        spawn_blocking(move || {
            // Stage A: discover candidate paths
            let paths = core::collect_paths(&path, recursive)?;
            // Stage B: read tags + durations (non-fatal per file)
            Ok(core::tags::read_track_rows(paths))
        }),
        Message::AddFinished,
    )
}

pub(crate) fn add_finished(
    state: &mut Resona,
    result: Result<(Vec<Track>, usize), String>,
) -> Task<Message> {
    state.adding = false;

    match result {
        Ok((rows, tag_failures)) => {
            let added = state.queue.add_files(rows.iter().map(|r| r.path.clone()));
            state.queue.apply_meta(rows);

            state.status = if tag_failures == 0 {
                format!("Added {added} tracks")
            } else {
                format!("Added {added} tracks ({tag_failures} tag read failures)")
            };

            state.path_input.clear();
            sync_and_save(state);
        }
        Err(e) => {
            state.status = format!("Add failed: {e}");
        }
    }

    Task::none()
}

/// Tag backfill for paths that are already queued (playlist load,
/// startup restore). Never adds entries.
pub(crate) fn meta_loaded(
    state: &mut Resona,
    result: Result<(Vec<Track>, usize), String>,
) -> Task<Message> {
    state.adding = false;

    match result {
        Ok((rows, tag_failures)) => {
            state.queue.apply_meta(rows);
            if tag_failures > 0 {
                state.status = format!("{tag_failures} tracks had unreadable tags");
            }
        }
        Err(e) => {
            state.status = format!("Metadata read failed: {e}");
        }
    }

    Task::none()
}
