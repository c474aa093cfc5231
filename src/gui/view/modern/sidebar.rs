//! Left sidebar (add controls, search, playlist files, settings).

use iced::Length;
use iced::widget::{button, checkbox, column, container, row, scrollable, text, text_input};

use crate::core::config::{Theme, UiVariant};

use super::super::super::state::{Message, Resona};

pub(crate) fn build_sidebar(state: &Resona) -> iced::widget::Container<'_, Message> {
    let path_input = text_input("Add file or folder path", &state.path_input)
        .on_input(Message::PathInputChanged)
        .on_submit(Message::AddPathPressed)
        .width(Length::Fill);

    let (add_btn, scan_btn) = if state.adding {
        (button("Add"), button("Scan tree"))
    } else {
        (
            button("Add").on_press(Message::AddPathPressed),
            button("Scan tree").on_press(Message::ScanPathPressed),
        )
    };

    let search = text_input("Search", &state.search_input)
        .on_input(Message::SearchChanged)
        .width(Length::Fill);

    let playlist_input = text_input("Playlist path (.json or .m3u)", &state.playlist_path_input)
        .on_input(Message::PlaylistPathChanged)
        .width(Length::Fill);

    let playlist_buttons = row![
        button("Save").on_press(Message::SavePlaylistPressed),
        button("Load").on_press(Message::LoadPlaylistPressed),
        button("Clear").on_press(Message::ClearQueue),
    ]
    .spacing(6);

    let theme_btn = match state.settings.theme {
        Theme::Dark => button("Light theme").on_press(Message::SetTheme(Theme::Light)),
        Theme::Light => button("Dark theme").on_press(Message::SetTheme(Theme::Dark)),
    };

    let settings = column![
        text("Settings").size(16),
        button("Classic UI").on_press(Message::SetUiVariant(UiVariant::Classic)),
        theme_btn,
        checkbox(state.settings.resume_on_start)
            .label("Resume on start")
            .on_toggle(Message::SetResumeOnStart),
        button("Quit").on_press(Message::Quit),
    ]
    .spacing(6);

    let col = column![
        text("Resona").size(20),
        text(&state.status).size(12),
        text(format!("Library ({} tracks)", state.queue.len())).size(16),
        path_input,
        row![add_btn, scan_btn].spacing(6),
        search,
        text("Playlist files").size(16),
        playlist_input,
        playlist_buttons,
        settings,
    ]
    .spacing(12);

    container(scrollable(col).height(Length::Fill)).padding(12)
}
