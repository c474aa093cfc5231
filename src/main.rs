//! Resona
//!
//! A desktop music player built with `iced`:
//! - play queue with transport controls (play/pause/seek/volume/mute)
//! - ID3 metadata + embedded album art display
//! - JSON and M3U playlist files
//! - two swappable layouts (classic / modern) over one backend
//!
//! Message flow is the usual iced loop:
//! **Message happens -> update changes state -> view redraws**
//!
//! Concurrency model:
//! - rodio lives on its own engine thread (core::playback), driven by
//!   commands and polled for events on a 200 ms tick.
//! - Filesystem scans and tag reads run on worker threads and come
//!   back as messages, so the UI never blocks on disk IO.

mod core;
mod gui;

use iced::Task;

use crate::core::config::Settings;
use gui::{Message, Resona};

fn main() -> iced::Result {
    iced::application(boot, gui::update, gui::view)
        .subscription(gui::subscription)
        .theme(theme)
        .title("Resona")
        .run()
}

/// Initial state: saved settings, restored queue, and (optionally)
/// playback of where the user left off.
fn boot() -> (Resona, Task<Message>) {
    let settings = Settings::load();

    let mut state = Resona::default();
    state.queue.set_volume(settings.volume);

    // Restore the last queue; files that vanished since last run are
    // silently dropped by the add filter.
    let restored = state.queue.replace(settings.last_playlist.clone());
    if restored > 0 {
        state.queue.set_current(settings.last_index.min(restored - 1));
        state.status = format!("Restored {restored} tracks");
    }

    state.settings = settings;

    let mut tasks = Vec::new();

    if restored > 0 {
        // Tags/durations for the restored queue, off-thread.
        let queued = state.queue.paths();
        state.adding = true;
        tasks.push(Task::perform(
            gui::update::spawn_blocking(move || Ok(core::tags::read_track_rows(queued))),
            Message::MetaLoaded,
        ));

        if state.settings.resume_on_start {
            tasks.push(Task::done(Message::PlayTrack(state.queue.current_index())));
        }
    }

    (state, Task::batch(tasks))
}

fn theme(state: &Resona) -> iced::Theme {
    match state.settings.theme {
        core::config::Theme::Dark => iced::Theme::Dark,
        core::config::Theme::Light => iced::Theme::Light,
    }
}
