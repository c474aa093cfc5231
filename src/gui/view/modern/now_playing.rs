//! Bottom now-playing bar: art thumb, track line, seek, transport, volume.

use iced::widget::{column, container, row, text};
use iced::{Alignment, Length};

use super::super::super::state::{Message, Resona};
use super::super::super::util::{display_artist, display_title};
use super::super::constants::COVER_THUMB;
use super::super::widgets::{cover_thumb, seek_row, transport_row, volume_row};

pub(crate) fn build_bar(state: &Resona) -> iced::widget::Container<'_, Message> {
    let art = cover_thumb(state.cover_for_now_playing(), COVER_THUMB);

    let track_line = match state.queue.current_track() {
        Some(t) if state.is_playing || state.is_paused => {
            format!("{} — {}", display_title(t), display_artist(t))
        }
        _ => "Nothing playing".to_string(),
    };

    let middle = column![text(track_line).size(14), seek_row(state)]
        .spacing(6)
        .width(Length::Fill);

    let bar = row![art, middle, transport_row(state), volume_row(state)]
        .spacing(16)
        .align_y(Alignment::Center);

    container(bar).padding(12)
}
