//! gui/update/playback.rs
//! GUI-playback engine bridge.
//!
//! Design goals:
//! - The GUI never touches rodio/symphonia directly.
//! - All IO / timing is driven by the engine + TickPlayback polling.
//! - Queue index arithmetic stays in `PlayQueue`; this module only
//!   forwards its decisions as `PlayerCommand`s.

use std::path::PathBuf;

use iced::Task;

use crate::core::playback::{PlayerCommand, PlayerEvent, start_playback};
use crate::core::tags::read_embedded_art;

use super::super::state::{Message, Resona};
use super::spawn_blocking;

fn ensure_engine(state: &mut Resona) {
    if state.playback.is_some() && state.playback_events.is_some() {
        return;
    }

    let (controller, events) = start_playback();
    controller.send(PlayerCommand::SetVolume(state.queue.effective_volume()));

    state.playback = Some(controller);
    state.playback_events = Some(std::cell::RefCell::new(events));
}

pub(crate) fn drain_events(state: &mut Resona) -> Task<Message> {
    let Some(rx_cell) = state.playback_events.as_ref() else {
        return Task::none();
    };

    let mut drained: Vec<PlayerEvent> = Vec::new();
    {
        // Receiver::try_recv only needs &self, so borrow() is enough.
        let rx = rx_cell.borrow();
        while let Ok(ev) = rx.try_recv() {
            drained.push(ev);
        }
    }

    let mut tasks = Vec::new();
    for ev in drained {
        tasks.push(handle_event(state, ev));
    }

    Task::batch(tasks)
}

pub(crate) fn play_track(state: &mut Resona, index: usize) -> Task<Message> {
    play_with_fade(state, index, 0)
}

fn play_with_fade(state: &mut Resona, index: usize, fade_in_ms: u64) -> Task<Message> {
    if !state.queue.set_current(index) {
        state.status = "Play failed: track no longer in queue.".into();
        return Task::none();
    }

    ensure_engine(state);

    let Some(track) = state.queue.current_track() else {
        return Task::none();
    };
    let path = track.path.clone();
    let duration_ms = track.duration_ms;

    let Some(controller) = &state.playback else {
        state.status = "Playback engine failed to initialize.".into();
        return Task::none();
    };

    #[cfg(debug_assertions)]
    eprintln!("[GUI] PlayTrack index={index} path={}", path.display());

    controller.send(PlayerCommand::PlayFile {
        path: path.clone(),
        fade_in_ms,
    });

    state.is_playing = true;
    state.is_paused = false;
    state.position_ms = 0;
    state.duration_ms = duration_ms;
    state.seek_preview_ratio = None;
    state.status = format!("Playing: {}", path.display());

    Task::none()
}

pub(crate) fn toggle_play_pause(state: &mut Resona) -> Task<Message> {
    if state.queue.is_empty() {
        state.status = "Queue is empty. Add some music first.".into();
        return Task::none();
    }

    if state.is_playing {
        pause(state)
    } else if state.is_paused {
        resume(state)
    } else {
        play_track(state, state.queue.current_index())
    }
}

fn pause(state: &mut Resona) -> Task<Message> {
    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::Pause);
    }
    state.is_playing = false;
    state.is_paused = true;
    Task::none()
}

fn resume(state: &mut Resona) -> Task<Message> {
    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::Resume);
    }
    state.is_playing = true;
    state.is_paused = false;
    Task::none()
}

pub(crate) fn stop(state: &mut Resona) -> Task<Message> {
    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::Stop);
    }

    state.is_playing = false;
    state.is_paused = false;
    state.position_ms = 0;
    state.seek_preview_ratio = None;
    state.status = "Stopped.".into();

    Task::none()
}

pub(crate) fn next(state: &mut Resona) -> Task<Message> {
    let Some(i) = state.queue.next_index() else {
        return Task::none();
    };
    play_with_fade(state, i, state.settings.fade_in_ms)
}

pub(crate) fn prev(state: &mut Resona) -> Task<Message> {
    let Some(i) = state.queue.prev_index() else {
        return Task::none();
    };
    play_with_fade(state, i, state.settings.fade_in_ms)
}

/// Seek slider changed: preview only (UI updates, no engine command).
pub(crate) fn seek_preview(state: &mut Resona, ratio: f32) -> Task<Message> {
    let Some(dur_ms) = state.duration_ms else {
        return Task::none();
    };

    let ratio = ratio.clamp(0.0, 1.0);
    state.seek_preview_ratio = Some(ratio);

    let target_ms = ((ratio as f64) * (dur_ms as f64)).round() as u64;
    state.position_ms = target_ms.min(dur_ms);

    Task::none()
}

/// Seek slider released: commit the last preview to the engine.
pub(crate) fn seek_commit(state: &mut Resona) -> Task<Message> {
    let Some(dur_ms) = state.duration_ms else {
        state.seek_preview_ratio = None;
        return Task::none();
    };

    let Some(ratio) = state.seek_preview_ratio.take() else {
        return Task::none();
    };

    let Some(controller) = &state.playback else {
        return Task::none();
    };

    let mut target_ms = ((ratio as f64) * (dur_ms as f64)).round() as u64;

    // Seeking to *exactly* the end tends to produce EOF weirdness; clamp slightly.
    if target_ms >= dur_ms {
        target_ms = dur_ms.saturating_sub(1);
    }

    #[cfg(debug_assertions)]
    eprintln!("[GUI] SeekCommit ratio={ratio} dur_ms={dur_ms} => target_ms={target_ms}");

    controller.send(PlayerCommand::Seek(target_ms));

    // Optimistic UI update; engine will confirm via Position ticks.
    state.position_ms = target_ms;

    Task::none()
}

pub(crate) fn set_volume(state: &mut Resona, volume: f32) -> Task<Message> {
    state.queue.set_volume(volume);

    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::SetVolume(state.queue.effective_volume()));
    }

    Task::none()
}

pub(crate) fn toggle_mute(state: &mut Resona) -> Task<Message> {
    let effective = state.queue.toggle_mute();

    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::SetVolume(effective));
    }

    state.status = if state.queue.muted() {
        "Muted.".into()
    } else {
        "Unmuted.".into()
    };

    Task::none()
}

pub(crate) fn cover_loaded(
    state: &mut Resona,
    path: PathBuf,
    handle: Option<iced::widget::image::Handle>,
) -> Task<Message> {
    match handle {
        Some(h) => state.cover = Some((path, h)),
        // Keep whatever art we had; a track without art shows the placeholder.
        None => {
            if state.cover.as_ref().is_some_and(|(p, _)| *p == path) {
                state.cover = None;
            }
        }
    }
    Task::none()
}

pub(crate) fn handle_event(state: &mut Resona, event: PlayerEvent) -> Task<Message> {
    #[cfg(debug_assertions)]
    match &event {
        PlayerEvent::Started { path, duration_ms } => {
            eprintln!(
                "[GUI] Event Started path={} duration_ms={duration_ms:?}",
                path.display()
            );
        }
        PlayerEvent::Error(e) => eprintln!("[GUI] Event Error {e}"),
        _ => {}
    }

    match event {
        PlayerEvent::Started { path, duration_ms } => {
            state.is_playing = true;
            state.is_paused = false;
            state.position_ms = 0;
            state.seek_preview_ratio = None;

            // Prefer the decoder's number; fall back to the probe we
            // did when the track was added.
            if duration_ms.is_some() {
                state.duration_ms = duration_ms;
            }

            return fetch_cover(state, path);
        }
        PlayerEvent::Paused => {
            state.is_playing = false;
            state.is_paused = true;
        }
        PlayerEvent::Resumed => {
            state.is_playing = true;
            state.is_paused = false;
        }
        PlayerEvent::Stopped => {
            state.is_playing = false;
            state.is_paused = false;
            state.position_ms = 0;
            state.seek_preview_ratio = None;
        }
        PlayerEvent::Position { position_ms } => {
            // If the user is dragging the seek slider, don't fight them.
            if state.seek_preview_ratio.is_none() {
                state.position_ms = position_ms;
            }
        }
        PlayerEvent::TrackEnded => {
            state.is_playing = false;
            state.position_ms = 0;
            state.seek_preview_ratio = None;

            // Auto-advance, wrapping at the end of the queue.
            return next(state);
        }
        PlayerEvent::Error(err) => {
            state.status = format!("Playback error: {err}");
            state.is_playing = false;
        }
    }

    Task::none()
}

fn fetch_cover(state: &mut Resona, path: PathBuf) -> Task<Message> {
    if state.cover.as_ref().is_some_and(|(p, _)| *p == path) {
        return Task::none();
    }

    let read_path = path.clone();
    Task::perform(
        spawn_blocking(move || {
            read_embedded_art(&read_path).map(iced::widget::image::Handle::from_bytes)
        }),
        move |handle| Message::CoverLoaded(path.clone(), handle),
    )
}
