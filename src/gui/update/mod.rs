//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;
use iced::futures::channel::oneshot;

use super::state::{Message, Resona};

mod library;
mod persist;
mod playback;
mod queue;

pub(crate) fn update(state: &mut Resona, message: Message) -> Task<Message> {
    match message {
        Message::TickPlayback => playback::drain_events(state),

        // Add pipeline
        Message::PathInputChanged(s) => {
            state.path_input = s;
            Task::none()
        }
        Message::AddPathPressed => library::add_path(state, false),
        Message::ScanPathPressed => library::add_path(state, true),
        Message::AddFinished(result) => library::add_finished(state, result),
        Message::MetaLoaded(result) => library::meta_loaded(state, result),

        // Queue
        Message::SelectTrack(i) => queue::select_track(state, i),
        Message::RemoveTrack(i) => queue::remove_track(state, i),
        Message::MoveTrackUp(i) => queue::move_track_up(state, i),
        Message::MoveTrackDown(i) => queue::move_track_down(state, i),
        Message::ClearQueue => queue::clear_queue(state),

        // Transport
        Message::PlayTrack(i) => playback::play_track(state, i),
        Message::TogglePlayPause => playback::toggle_play_pause(state),
        Message::Stop => playback::stop(state),
        Message::Next => playback::next(state),
        Message::Prev => playback::prev(state),

        // Seek: preview vs commit
        Message::SeekTo(ratio) => playback::seek_preview(state, ratio),
        Message::SeekCommit => playback::seek_commit(state),

        Message::SetVolume(vol) => playback::set_volume(state, vol),
        Message::ToggleMute => playback::toggle_mute(state),

        Message::CoverLoaded(path, handle) => playback::cover_loaded(state, path, handle),

        // Playlist files
        Message::PlaylistPathChanged(s) => {
            state.playlist_path_input = s;
            Task::none()
        }
        Message::SavePlaylistPressed => persist::save_playlist(state),
        Message::LoadPlaylistPressed => persist::load_playlist(state),

        // Settings
        Message::SetUiVariant(v) => persist::set_ui_variant(state, v),
        Message::SetTheme(t) => persist::set_theme(state, t),
        Message::SetResumeOnStart(v) => persist::set_resume_on_start(state, v),
        Message::SearchChanged(s) => {
            state.search_input = s;
            Task::none()
        }

        Message::Quit => persist::quit(state),
    }
}

/// Run a blocking function on a background thread and await the result.
/// Keeps the oneshot + thread boilerplate out of every "do work
/// off-thread, then emit Message::...Finished" call site.
pub(crate) async fn spawn_blocking<T>(f: impl FnOnce() -> T + Send + 'static) -> T
where
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel::<T>();

    std::thread::spawn(move || {
        let _ = tx.send(f());
    });

    rx.await
        .expect("background worker dropped without returning")
}
