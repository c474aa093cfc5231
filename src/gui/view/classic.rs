//! Classic layout: one column, transport in the middle, playlist below.
//! The original look of the player; shares every message with the
//! modern layout.

use iced::widget::{Column, button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Length};

use super::super::state::{Message, Resona};
use super::super::util::{display_artist, display_title};
use super::constants::{CLASSIC_LIST_H, ROW_TEXT};
use super::widgets::{fmt_duration, seek_row, transport_row, volume_row};

pub(crate) fn view(state: &Resona) -> Column<'_, Message> {
    let header = row![
        text("Resona").size(20).width(Length::Fill),
        settings_row(state),
        button("Quit").on_press(Message::Quit),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    // Now playing
    let (np_title, np_artist) = match state.queue.current_track() {
        Some(t) if state.is_playing || state.is_paused => (display_title(t), display_artist(t)),
        _ => ("No song selected".to_string(), String::new()),
    };

    let now_playing = column![text(np_title).size(16), text(np_artist).size(12)]
        .spacing(4)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    let transport = row![
        transport_row(state),
        volume_row(state),
    ]
    .spacing(24)
    .align_y(Alignment::Center);

    column![
        header,
        now_playing,
        seek_row(state),
        container(transport).center_x(Length::Fill),
        build_queue_panel(state),
        text(&state.status).size(12),
    ]
    .spacing(12)
    .padding(12)
}

fn settings_row(state: &Resona) -> iced::widget::Row<'_, Message> {
    use crate::core::config::{Theme, UiVariant};

    let modern_btn = button("Modern UI").on_press(Message::SetUiVariant(UiVariant::Modern));

    let theme_btn = match state.settings.theme {
        Theme::Dark => button("Light").on_press(Message::SetTheme(Theme::Light)),
        Theme::Light => button("Dark").on_press(Message::SetTheme(Theme::Dark)),
    };

    row![modern_btn, theme_btn].spacing(8)
}

fn build_queue_panel(state: &Resona) -> Column<'_, Message> {
    // Add row
    let path_input = text_input("Add file or folder path", &state.path_input)
        .on_input(Message::PathInputChanged)
        .on_submit(Message::AddPathPressed)
        .width(Length::Fill);

    let (add_btn, scan_btn) = if state.adding {
        (button("Add"), button("Scan"))
    } else {
        (
            button("Add").on_press(Message::AddPathPressed),
            button("Scan").on_press(Message::ScanPathPressed),
        )
    };

    let add_row = row![path_input, add_btn, scan_btn].spacing(8);

    // Playlist file row
    let playlist_input = text_input("Playlist path (.json or .m3u)", &state.playlist_path_input)
        .on_input(Message::PlaylistPathChanged)
        .width(Length::Fill);

    let playlist_row = row![
        playlist_input,
        button("Save").on_press(Message::SavePlaylistPressed),
        button("Load").on_press(Message::LoadPlaylistPressed),
    ]
    .spacing(8);

    let header = row![
        text("Playlist").size(16).width(Length::Fill),
        button("Clear").on_press(Message::ClearQueue),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    column![
        header,
        add_row,
        playlist_row,
        build_queue_list(state),
    ]
    .spacing(8)
}

fn build_queue_list(state: &Resona) -> iced::widget::Scrollable<'_, Message> {
    let mut list = column![];

    for (i, t) in state.queue.tracks().iter().enumerate() {
        let marker = if i == state.queue.current_index() && (state.is_playing || state.is_paused) {
            "▶ "
        } else {
            "  "
        };

        let label = format!(
            "{marker}{} — {} ({})",
            display_title(t),
            display_artist(t),
            fmt_duration(t.duration_ms),
        );

        let track_row = row![
            button(text(label).size(ROW_TEXT))
                .on_press(Message::PlayTrack(i))
                .width(Length::Fill),
            button("↑").on_press(Message::MoveTrackUp(i)),
            button("↓").on_press(Message::MoveTrackDown(i)),
            button("×").on_press(Message::RemoveTrack(i)),
        ]
        .spacing(4)
        .align_y(Alignment::Center);

        list = list.push(track_row);
    }

    scrollable(list.spacing(4)).height(Length::Fixed(CLASSIC_LIST_H))
}
