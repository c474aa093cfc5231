//! Reusable small widgets/helpers shared by both UI layouts.

use iced::widget::{button, column, container, image, row, slider, text};
use iced::{Alignment, Element, Length};

use super::super::state::{Message, Resona};
use super::constants::VOLUME_W;

/// "m:ss", or "h:mm:ss" once there are hours.
pub(crate) fn fmt_clock(ms: u64) -> String {
    let s = ms / 1000;
    let h = s / 3600;
    let m = (s % 3600) / 60;
    let s = s % 60;

    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

pub(crate) fn fmt_duration(ms: Option<u64>) -> String {
    match ms {
        Some(ms) => fmt_clock(ms),
        None => "-:--".into(),
    }
}

pub(crate) fn cover_placeholder(size: f32) -> iced::widget::Container<'static, Message> {
    container(
        column![text("♪").size(size / 4.0), text("no art").size(12)]
            .spacing(4)
            .align_x(Alignment::Center),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .center_x(Length::Fill)
    .center_y(Length::Fill)
}

/// If `handle` exists, show it; otherwise show the placeholder.
pub(crate) fn cover_thumb(
    handle: Option<&iced::widget::image::Handle>,
    size: f32,
) -> Element<'static, Message> {
    match handle {
        Some(h) => container(image(h.clone()))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        None => cover_placeholder(size).into(),
    }
}

/// Previous / play-pause / next / stop buttons.
pub(crate) fn transport_row(state: &Resona) -> iced::widget::Row<'_, Message> {
    let play_label = if state.is_playing { "⏸" } else { "▶" };

    row![
        button("⏮").on_press(Message::Prev),
        button(play_label).on_press(Message::TogglePlayPause),
        button("⏭").on_press(Message::Next),
        button("⏹").on_press(Message::Stop),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
}

/// Seek slider plus elapsed/total labels.
///
/// The slider works in 0..=1 ratio space. While dragging we show the
/// preview ratio; engine ticks take over again after the commit.
pub(crate) fn seek_row(state: &Resona) -> iced::widget::Row<'_, Message> {
    let ratio = state.seek_preview_ratio.unwrap_or_else(|| {
        match state.duration_ms {
            Some(dur) if dur > 0 => (state.position_ms as f32 / dur as f32).clamp(0.0, 1.0),
            _ => 0.0,
        }
    });

    let seek = slider(0.0..=1.0, ratio, Message::SeekTo)
        .on_release(Message::SeekCommit)
        .step(0.001)
        .width(Length::Fill);

    let time_text = format!(
        "{} / {}",
        fmt_clock(state.position_ms),
        fmt_duration(state.duration_ms)
    );

    row![seek, text(time_text).size(12)]
        .spacing(10)
        .align_y(Alignment::Center)
}

/// Volume slider plus mute toggle.
pub(crate) fn volume_row(state: &Resona) -> iced::widget::Row<'_, Message> {
    let mute_label = if state.queue.muted() { "🔇" } else { "🔊" };

    row![
        text("Vol").size(12),
        slider(0.0..=1.0, state.queue.volume(), Message::SetVolume)
            .step(0.01)
            .width(Length::Fixed(VOLUME_W)),
        button(mute_label).on_press(Message::ToggleMute),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats() {
        assert_eq!(fmt_clock(0), "0:00");
        assert_eq!(fmt_clock(59_000), "0:59");
        assert_eq!(fmt_clock(61_500), "1:01");
        assert_eq!(fmt_clock(3_600_000), "1:00:00");
        assert_eq!(fmt_clock(3_661_000), "1:01:01");
    }

    #[test]
    fn unknown_duration_shows_dashes() {
        assert_eq!(fmt_duration(None), "-:--");
        assert_eq!(fmt_duration(Some(95_000)), "1:35");
    }
}
